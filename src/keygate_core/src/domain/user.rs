use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, password::Password, user_name::UserName};

/// Role assigned to every freshly activated user.
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid username")]
    InvalidUserName,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Registration payload that has not been persisted yet. Lives only inside
/// the signed activation token between the two registration phases.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUser {
    user_name: UserName,
    email: Email,
    password: Password,
}

impl PendingUser {
    pub fn new(user_name: UserName, email: Email, password: Password) -> Self {
        Self {
            user_name,
            email,
            password,
        }
    }

    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn into_parts(self) -> (UserName, Email, Password) {
        (self.user_name, self.email, self.password)
    }
}

/// Persisted user record. Constructed by a `UserStore`, never directly from
/// caller input; the password field holds the argon2 hash, not the raw
/// password.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    user_name: UserName,
    email: Email,
    password_hash: Secret<String>,
    role: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        user_name: UserName,
        email: Email,
        password_hash: Secret<String>,
        role: String,
        refresh_token: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_name,
            email,
            password_hash,
            role,
            refresh_token,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the stored refresh token and touch `updated_at`. Used by the
    /// in-memory store; the Postgres store does this in a single UPDATE.
    pub fn set_refresh_token(&mut self, refresh_token: Option<String>) {
        self.refresh_token = refresh_token;
        self.updated_at = Utc::now();
    }
}
