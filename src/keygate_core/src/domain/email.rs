use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Validated email address, normalized to lowercase with surrounding
/// whitespace removed. Wrapped in a `Secret` so it never shows up in
/// derived `Debug` output.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = raw.expose_secret().trim().to_lowercase();
        if !EMAIL_SHAPE.is_match(&normalized) {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(Secret::from(normalized)))
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}
