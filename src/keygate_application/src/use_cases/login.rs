use keygate_core::{Email, Password, TokenIssuer, TokenIssuerError, User, UserStore, UserStoreError};

/// Response from the login use case. The refresh token is also mirrored
/// into the user record before this is returned.
#[derive(Debug)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
}

/// Login use case - authenticates credentials and establishes a session.
pub struct LoginUseCase<'a, U, I>
where
    U: UserStore,
    I: TokenIssuer,
{
    user_store: &'a U,
    token_issuer: &'a I,
}

impl<'a, U, I> LoginUseCase<'a, U, I>
where
    U: UserStore,
    I: TokenIssuer,
{
    pub fn new(user_store: &'a U, token_issuer: &'a I) -> Self {
        Self {
            user_store,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// Nothing is mutated unless the password check passed; the refresh
    /// token write is a single atomic update on the user record.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<LoginResponse, LoginError> {
        let user = self.user_store.authenticate(&email, &password).await?;

        let access_token = self.token_issuer.issue_access_token(&user)?;
        let refresh_token = self.token_issuer.issue_refresh_token(&user)?;

        self.user_store
            .update_refresh_token(user.id(), Some(refresh_token.clone()))
            .await?;

        Ok(LoginResponse {
            user,
            access_token,
            refresh_token,
        })
    }
}
