use keygate_core::{
    ActivationCode, PendingActivation, TokenIssuer, TokenIssuerError, User, UserStore,
    UserStoreError,
};

/// Error types specific to the activate use case
#[derive(Debug, thiserror::Error)]
pub enum ActivateError {
    #[error("Token issuer error: {0}")]
    TokenIssuerError(#[from] TokenIssuerError),
    #[error("Invalid activation code")]
    InvalidActivationCode,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("User record missing after creation")]
    MissingAfterCreate,
}

/// Activate use case - second phase of the two-step registration flow.
///
/// Verifies the activation token, compares the submitted code against the
/// embedded one, and only then materializes the user record. The token is
/// stateless, so a consumed token stays structurally valid until it
/// expires; a second activation attempt runs into the store's uniqueness
/// constraint instead.
pub struct ActivateUseCase<'a, U, I>
where
    U: UserStore,
    I: TokenIssuer,
{
    user_store: &'a U,
    token_issuer: &'a I,
}

impl<'a, U, I> ActivateUseCase<'a, U, I>
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

    /// Execute the activate use case
    ///
    /// # Returns
    /// The created user, read back from the store after the write.
    #[tracing::instrument(name = "ActivateUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        activation_token: &str,
        submitted_code: &ActivationCode,
    ) -> Result<User, ActivateError> {
        let PendingActivation { pending_user, code } =
            self.token_issuer.verify_activation_token(activation_token)?;

        if &code != submitted_code {
            return Err(ActivateError::InvalidActivationCode);
        }

        let created = self.user_store.create(pending_user).await?;

        self.user_store
            .find_by_id(created.id())
            .await?
            .ok_or(ActivateError::MissingAfterCreate)
    }
}
