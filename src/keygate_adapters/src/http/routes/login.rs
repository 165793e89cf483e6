use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use keygate_application::LoginUseCase;
use keygate_core::{Email, Password, TokenIssuer, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::auth::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, create_session_cookie};
use crate::http::response::{ApiResponse, UserResponse};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// The token pair travels both as http-only cookies and in the body, so
/// browser and non-browser clients can each pick their transport.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, I>(
    State((user_store, token_issuer)): State<(U, I)>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    I: TokenIssuer + Clone + 'static,
{
    let email = request
        .email
        .ok_or(ApiError::InvalidInput("Missing email".to_string()))?;
    let password = request
        .password
        .ok_or(ApiError::InvalidInput("Missing password".to_string()))?;

    let email = Email::try_from(email)?;
    let password = Password::try_from(password)?;

    let use_case = LoginUseCase::new(&user_store, &token_issuer);
    let response = use_case.execute(email, password).await?;

    let jar = jar
        .add(create_session_cookie(
            ACCESS_TOKEN_COOKIE,
            response.access_token.clone(),
        ))
        .add(create_session_cookie(
            REFRESH_TOKEN_COOKIE,
            response.refresh_token.clone(),
        ));

    let body = ApiResponse::new(
        StatusCode::OK,
        LoginData {
            user: UserResponse::from(&response.user),
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        },
        "User logged in successfully",
    );

    Ok((jar, body))
}
