use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use keygate_core::User;
use secrecy::ExposeSecret;
use serde::Serialize;
use uuid::Uuid;

/// Uniform success envelope. Every endpoint returns this shape so clients
/// can branch on `success` without inspecting the status line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status_code: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
            message: message.into(),
            success: status_code.is_success(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// User as exposed over the API. The password hash and refresh token never
/// leave the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            user_name: user.user_name().to_string(),
            email: user.email().as_ref().expose_secret().clone(),
            role: user.role().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}
