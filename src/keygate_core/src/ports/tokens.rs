use thiserror::Error;
use uuid::Uuid;

use crate::domain::{activation_code::ActivationCode, user::PendingUser, user::User};

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Invalid or expired token")]
    InvalidOrExpired,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenIssuerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidOrExpired, Self::InvalidOrExpired) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Contents of a verified activation token.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingActivation {
    pub pending_user: PendingUser,
    pub code: ActivationCode,
}

/// Verified identity carried by an access token. Claims are authoritative
/// between issuance and expiry; flows that need live state must hit the
/// user store themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenClaims {
    pub id: Uuid,
    pub email: String,
    pub user_name: String,
}

/// Creates and verifies the three signed, time-bounded token kinds. Each
/// kind is signed with its own secret; verification rejects tampered and
/// expired tokens identically, without leaking which check failed.
pub trait TokenIssuer: Send + Sync {
    fn issue_activation_token(
        &self,
        pending_user: &PendingUser,
    ) -> Result<(String, ActivationCode), TokenIssuerError>;
    fn verify_activation_token(&self, token: &str) -> Result<PendingActivation, TokenIssuerError>;
    fn issue_access_token(&self, user: &User) -> Result<String, TokenIssuerError>;
    fn issue_refresh_token(&self, user: &User) -> Result<String, TokenIssuerError>;
    fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, TokenIssuerError>;
}
