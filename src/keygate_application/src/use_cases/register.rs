use askama::Template;
use keygate_core::{EmailClient, PendingUser, TokenIssuer, TokenIssuerError, UserStore, UserStoreError};

pub const ACTIVATION_EMAIL_SUBJECT: &str = "Activate Your Account";

/// Response from the register use case. Carries the signed activation
/// token, never the activation code itself - the code only travels by
/// email.
#[derive(Debug, PartialEq)]
pub struct RegisterResponse {
    pub activation_token: String,
}

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Email already registered")]
    EmailTaken,
    #[error("Username already taken")]
    UserNameTaken,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
    #[error("Failed to render activation email: {0}")]
    TemplateError(String),
    #[error("Failed to send activation email: {0}")]
    EmailError(String),
}

#[derive(Template)]
#[template(path = "activation_email.html")]
struct ActivationEmail<'a> {
    user_name: &'a str,
    code: &'a str,
}

/// Register use case - first phase of the two-step registration flow.
///
/// Checks uniqueness, wraps the pending user and a fresh activation code in
/// a signed token, and mails the code to the caller. Nothing is persisted;
/// the token returned to the caller is the only intermediate state.
pub struct RegisterUseCase<'a, U, I, E>
where
    U: UserStore,
    I: TokenIssuer,
    E: EmailClient,
{
    user_store: &'a U,
    token_issuer: &'a I,
    email_client: &'a E,
}

impl<'a, U, I, E> RegisterUseCase<'a, U, I, E>
where
    U: UserStore,
    I: TokenIssuer,
    E: EmailClient,
{
    pub fn new(user_store: &'a U, token_issuer: &'a I, email_client: &'a E) -> Self {
        Self {
            user_store,
            token_issuer,
            email_client,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The activation token on success. A send failure is not retried; the
    /// caller has to resubmit the registration.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, pending_user: PendingUser) -> Result<RegisterResponse, RegisterError> {
        if self
            .user_store
            .find_by_email(pending_user.email())
            .await?
            .is_some()
        {
            return Err(RegisterError::EmailTaken);
        }
        if self
            .user_store
            .find_by_user_name(pending_user.user_name())
            .await?
            .is_some()
        {
            return Err(RegisterError::UserNameTaken);
        }

        let (activation_token, code) = self.token_issuer.issue_activation_token(&pending_user)?;

        let content = ActivationEmail {
            user_name: pending_user.user_name().as_str(),
            code: code.as_str(),
        }
        .render()
        .map_err(|e| RegisterError::TemplateError(e.to_string()))?;

        self.email_client
            .send_email(pending_user.email(), ACTIVATION_EMAIL_SUBJECT, &content)
            .await
            .map_err(RegisterError::EmailError)?;

        Ok(RegisterResponse { activation_token })
    }
}
