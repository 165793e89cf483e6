use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Raw password as submitted by the caller. Only ever exposed at the
/// hashing boundary; the persisted record stores the argon2 hash instead.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        if raw.expose_secret().is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self(raw))
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
