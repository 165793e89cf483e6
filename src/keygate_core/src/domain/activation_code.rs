use rand::Rng;
use thiserror::Error;

const CODE_MIN: u16 = 1000;
const CODE_MAX: u16 = 9999;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivationCodeError {
    #[error("Activation code must be a four digit number")]
    InvalidCode,
}

/// Four digit numeric code mailed to the user during registration. Proves
/// receipt of the activation email when submitted back with the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationCode(String);

impl ActivationCode {
    /// Draw a fresh code uniformly from [1000, 9999].
    pub fn new() -> Self {
        let code = rand::rng().random_range(CODE_MIN..=CODE_MAX);
        Self(code.to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, ActivationCodeError> {
        let raw = raw.trim();
        let four_digits = raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit());
        if !four_digits || raw.starts_with('0') {
            return Err(ActivationCodeError::InvalidCode);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ActivationCode {
    fn default() -> Self {
        Self::new()
    }
}
