use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use keygate_application::{ActivateError, LoginError, LogoutError, RegisterError};
use keygate_core::{ActivationCodeError, TokenIssuerError, UserError, UserStoreError};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthGuardError;

/// Uniform error envelope, mirroring the success shape with `data: null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub data: Option<()>,
    pub message: String,
    pub success: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Incorrect activation code")]
    InvalidActivationCode,

    #[error("User not found")]
    UserNotFound,

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Dependency failure: {0}")]
    DependencyFailure(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            ApiError::InvalidInput(_) | ApiError::Conflict(_) | ApiError::InvalidActivationCode => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::AuthenticationError(_) => (StatusCode::UNAUTHORIZED, self.to_string()),

            // Details go to the log, not the client.
            ApiError::DependencyFailure(details) => {
                tracing::error!(error = %details, "Dependency failure");
                (
                    StatusCode::UNAUTHORIZED,
                    "A dependent service failed to process the request".to_string(),
                )
            }

            ApiError::UnexpectedError(details) => {
                tracing::error!(error = %details, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status_code: status_code.as_u16(),
            data: None,
            message,
            success: false,
            errors: Vec::new(),
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<ActivationCodeError> for ApiError {
    fn from(error: ActivationCodeError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<AuthGuardError> for ApiError {
    fn from(error: AuthGuardError) -> Self {
        ApiError::AuthenticationError(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => {
                ApiError::Conflict("User already exists".to_string())
            }
            UserStoreError::UserNotFound => ApiError::UserNotFound,
            UserStoreError::IncorrectPassword => {
                ApiError::AuthenticationError("Incorrect password".to_string())
            }
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenIssuerError> for ApiError {
    fn from(error: TokenIssuerError) -> Self {
        match error {
            TokenIssuerError::InvalidOrExpired => {
                ApiError::AuthenticationError("Invalid or expired token".to_string())
            }
            TokenIssuerError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailTaken => {
                ApiError::Conflict("User with this email already exists".to_string())
            }
            RegisterError::UserNameTaken => {
                ApiError::Conflict("User with this username already exists".to_string())
            }
            RegisterError::UserStoreError(e) => e.into(),
            RegisterError::TokenIssuerError(e) => e.into(),
            RegisterError::TemplateError(e) => ApiError::UnexpectedError(e),
            RegisterError::EmailError(e) => ApiError::DependencyFailure(e),
        }
    }
}

impl From<ActivateError> for ApiError {
    fn from(error: ActivateError) -> Self {
        match error {
            ActivateError::TokenIssuerError(e) => e.into(),
            ActivateError::InvalidActivationCode => ApiError::InvalidActivationCode,
            ActivateError::UserStoreError(e) => e.into(),
            ActivateError::MissingAfterCreate => {
                ApiError::UnexpectedError("User record missing after create".to_string())
            }
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserStoreError(e) => e.into(),
            LoginError::TokenIssuerError(e) => e.into(),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            // The session cookies are cleared regardless, but a failed store
            // write still reaches the client as a structured error.
            LogoutError::UserStoreError(UserStoreError::UnexpectedError(e)) => {
                ApiError::DependencyFailure(e)
            }
            LogoutError::UserStoreError(e) => e.into(),
        }
    }
}
