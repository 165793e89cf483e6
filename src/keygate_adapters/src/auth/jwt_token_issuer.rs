use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use keygate_core::{
    AccessTokenClaims, ActivationCode, Email, Password, PendingActivation, PendingUser,
    TokenIssuer, TokenIssuerError, User, UserName,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, de::DeserializeOwned, ser::SerializeStruct};
use uuid::Uuid;

/// Activation tokens are deliberately short-lived: they carry the raw
/// registration password inside a signed-but-not-encrypted payload, and the
/// expiry window bounds the exposure.
pub const ACTIVATION_TOKEN_TTL_SECONDS: i64 = 300;

/// One secret per token kind, so an access token can never pass for an
/// activation or refresh token.
#[derive(Clone)]
pub struct TokenConfig {
    pub activation_secret: Secret<String>,
    pub access_secret: Secret<String>,
    pub access_ttl_seconds: i64,
    pub refresh_secret: Secret<String>,
    pub refresh_ttl_seconds: i64,
}

#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: TokenConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Issuing activation token", skip_all)]
    fn issue_activation_token(
        &self,
        pending_user: &PendingUser,
    ) -> Result<(String, ActivationCode), TokenIssuerError> {
        let code = ActivationCode::new();
        let claims = ActivationClaims {
            user: PendingUserClaims {
                user_name: pending_user.user_name().as_str().to_string(),
                email: pending_user.email().as_ref().expose_secret().clone(),
                password: pending_user.password().as_ref().clone(),
            },
            activation_code: code.as_str().to_string(),
            exp: expiry_timestamp(ACTIVATION_TOKEN_TTL_SECONDS)?,
        };

        let token = sign(&claims, &self.config.activation_secret)?;
        Ok((token, code))
    }

    #[tracing::instrument(name = "Verifying activation token", skip_all)]
    fn verify_activation_token(&self, token: &str) -> Result<PendingActivation, TokenIssuerError> {
        let claims: ActivationClaims = decode_claims(token, &self.config.activation_secret)?;

        // The payload was validated before signing; failing here means the
        // token was minted with a leaked secret.
        let user_name = UserName::try_from(claims.user.user_name)
            .map_err(|_| TokenIssuerError::InvalidOrExpired)?;
        let email = Email::try_from(Secret::from(claims.user.email))
            .map_err(|_| TokenIssuerError::InvalidOrExpired)?;
        let password = Password::try_from(claims.user.password)
            .map_err(|_| TokenIssuerError::InvalidOrExpired)?;
        let code = ActivationCode::parse(&claims.activation_code)
            .map_err(|_| TokenIssuerError::InvalidOrExpired)?;

        Ok(PendingActivation {
            pending_user: PendingUser::new(user_name, email, password),
            code,
        })
    }

    #[tracing::instrument(name = "Issuing access token", skip_all)]
    fn issue_access_token(&self, user: &User) -> Result<String, TokenIssuerError> {
        let claims = AccessClaims {
            sub: user.id().to_string(),
            email: user.email().as_ref().expose_secret().clone(),
            user_name: user.user_name().as_str().to_string(),
            exp: expiry_timestamp(self.config.access_ttl_seconds)?,
        };
        sign(&claims, &self.config.access_secret)
    }

    #[tracing::instrument(name = "Issuing refresh token", skip_all)]
    fn issue_refresh_token(&self, user: &User) -> Result<String, TokenIssuerError> {
        let claims = RefreshClaims {
            sub: user.id().to_string(),
            exp: expiry_timestamp(self.config.refresh_ttl_seconds)?,
        };
        sign(&claims, &self.config.refresh_secret)
    }

    #[tracing::instrument(name = "Verifying access token", skip_all)]
    fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, TokenIssuerError> {
        let claims: AccessClaims = decode_claims(token, &self.config.access_secret)?;
        let id = Uuid::parse_str(&claims.sub).map_err(|_| TokenIssuerError::InvalidOrExpired)?;

        Ok(AccessTokenClaims {
            id,
            email: claims.email,
            user_name: claims.user_name,
        })
    }
}

fn expiry_timestamp(ttl_seconds: i64) -> Result<usize, TokenIssuerError> {
    let delta = chrono::Duration::try_seconds(ttl_seconds).ok_or(
        TokenIssuerError::UnexpectedError("Failed to create token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenIssuerError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    exp.try_into()
        .map_err(|_| TokenIssuerError::UnexpectedError("Failed to cast i64 to usize".to_string()))
}

fn sign<C: Serialize>(claims: &C, secret: &Secret<String>) -> Result<String, TokenIssuerError> {
    encode(
        &jsonwebtoken::Header::default(),
        claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| TokenIssuerError::UnexpectedError(e.to_string()))
}

// Tampered and expired tokens are rejected identically: the caller only
// learns InvalidOrExpired.
fn decode_claims<C: DeserializeOwned>(
    token: &str,
    secret: &Secret<String>,
) -> Result<C, TokenIssuerError> {
    decode::<C>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| TokenIssuerError::InvalidOrExpired)
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivationClaims {
    user: PendingUserClaims,
    activation_code: String,
    exp: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PendingUserClaims {
    user_name: String,
    email: String,
    password: Secret<String>,
}

// Secret<String> has no Serialize impl by design; expose it only at the
// signing boundary.
impl Serialize for PendingUserClaims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("PendingUserClaims", 3)?;
        state.serialize_field("userName", &self.user_name)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("password", &self.password.expose_secret())?;
        state.end()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessClaims {
    sub: String,
    email: String,
    user_name: String,
    exp: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct RefreshClaims {
    sub: String,
    exp: usize,
}
