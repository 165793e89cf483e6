use axum_extra::extract::CookieJar;
use http::{HeaderMap, header::AUTHORIZATION};
use keygate_core::{AccessTokenClaims, TokenIssuer};
use thiserror::Error;

use super::cookies::ACCESS_TOKEN_COOKIE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthGuardError {
    #[error("Missing access token")]
    MissingToken,
    #[error("Invalid or expired access token")]
    InvalidToken,
}

/// Extract the bearer token from the `accessToken` cookie, falling back to
/// the `Authorization` header with the scheme prefix stripped.
pub fn extract_access_token(headers: &HeaderMap) -> Result<String, AuthGuardError> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        return Ok(cookie.value().to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.strip_prefix("Bearer").unwrap_or(value).trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(AuthGuardError::MissingToken)
}

/// Gate for protected routes. The verified claims are trusted as-is -
/// authoritative between issuance and expiry - and the user record is not
/// re-fetched; flows that need live state hit the store themselves.
#[tracing::instrument(name = "Authorizing request", skip_all)]
pub fn authorize<I: TokenIssuer>(
    headers: &HeaderMap,
    token_issuer: &I,
) -> Result<AccessTokenClaims, AuthGuardError> {
    let token = extract_access_token(headers)?;
    token_issuer
        .verify_access_token(&token)
        .map_err(|_| AuthGuardError::InvalidToken)
}
