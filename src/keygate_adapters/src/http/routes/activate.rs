use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use keygate_application::ActivateUseCase;
use keygate_core::{ActivationCode, TokenIssuer, UserStore};
use serde::Deserialize;

use crate::http::response::{ApiResponse, UserResponse};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct ActivateRequest {
    pub activation_token: Option<String>,
    pub activation_code: Option<String>,
}

#[tracing::instrument(name = "Activate user", skip_all)]
pub async fn activate<U, I>(
    State((user_store, token_issuer)): State<(U, I)>,
    Json(request): Json<ActivateRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    I: TokenIssuer + Clone + 'static,
{
    let token = request
        .activation_token
        .ok_or(ApiError::InvalidInput("Missing activation token".to_string()))?;
    let code = request
        .activation_code
        .ok_or(ApiError::InvalidInput("Missing activation code".to_string()))?;
    let code = ActivationCode::parse(&code)?;

    let use_case = ActivateUseCase::new(&user_store, &token_issuer);
    let user = use_case.execute(&token, &code).await?;

    Ok(ApiResponse::new(
        StatusCode::CREATED,
        UserResponse::from(&user),
        "User activated successfully",
    ))
}
