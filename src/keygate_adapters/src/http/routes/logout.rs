use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use http::HeaderMap;
use keygate_application::LogoutUseCase;
use keygate_core::{TokenIssuer, UserStore};

use crate::auth::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, authorize, create_removal_cookie};
use crate::http::response::ApiResponse;

use super::error::ApiError;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, I>(
    State((user_store, token_issuer)): State<(U, I)>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    I: TokenIssuer + Clone + 'static,
{
    let claims = authorize(&headers, &token_issuer)?;

    let use_case = LogoutUseCase::new(&user_store);
    use_case.execute(claims.id).await?;

    let jar = jar
        .add(create_removal_cookie(ACCESS_TOKEN_COOKIE))
        .add(create_removal_cookie(REFRESH_TOKEN_COOKIE));

    let body = ApiResponse::new(
        StatusCode::OK,
        None::<()>,
        "User logged out successfully",
    );

    Ok((jar, body))
}
