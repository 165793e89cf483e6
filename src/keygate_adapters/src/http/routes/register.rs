use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use keygate_application::RegisterUseCase;
use keygate_core::{Email, EmailClient, Password, PendingUser, TokenIssuer, UserName, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::http::response::ApiResponse;

use super::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub user_name: Option<String>,
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub activation_token: String,
}

#[tracing::instrument(name = "Registration", skip_all)]
pub async fn register<U, I, E>(
    State((user_store, token_issuer, email_client)): State<(U, I, E)>,
    Json(request): Json<RegistrationRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    I: TokenIssuer + Clone + 'static,
    E: EmailClient + Clone + 'static,
{
    let user_name = request
        .user_name
        .ok_or(ApiError::InvalidInput("Missing username".to_string()))?;
    let email = request
        .email
        .ok_or(ApiError::InvalidInput("Missing email".to_string()))?;
    let password = request
        .password
        .ok_or(ApiError::InvalidInput("Missing password".to_string()))?;

    let pending_user = PendingUser::new(
        UserName::try_from(user_name)?,
        Email::try_from(email)?,
        Password::try_from(password)?,
    );

    let use_case = RegisterUseCase::new(&user_store, &token_issuer, &email_client);
    let response = use_case.execute(pending_user).await?;

    Ok(ApiResponse::new(
        StatusCode::CREATED,
        RegistrationData {
            activation_token: response.activation_token,
        },
        "Registration started, check your email for the activation code",
    ))
}
