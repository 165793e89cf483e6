use super::user::UserError;

const MAX_LEN: usize = 32;

/// Validated username, normalized to lowercase with surrounding whitespace
/// removed. Restricted to ASCII alphanumerics plus `.`, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || normalized.len() > MAX_LEN {
            return Err(UserError::InvalidUserName);
        }
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
        if !normalized.chars().all(allowed) {
            return Err(UserError::InvalidUserName);
        }
        Ok(Self(normalized))
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
