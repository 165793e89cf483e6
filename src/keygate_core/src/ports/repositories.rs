use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{email::Email, password::Password, user::PendingUser, user::User, user_name::UserName};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persisted collection of user records.
///
/// `create` hashes the pending password exactly once before the write;
/// `update_refresh_token` is a single atomic update that never touches any
/// other field.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn find_by_user_name(&self, user_name: &UserName)
    -> Result<Option<User>, UserStoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError>;
    async fn create(&self, pending_user: PendingUser) -> Result<User, UserStoreError>;
    async fn authenticate(&self, email: &Email, password: &Password)
    -> Result<User, UserStoreError>;
    async fn update_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<String>,
    ) -> Result<(), UserStoreError>;
}
