use keygate_core::{UserStore, UserStoreError};
use uuid::Uuid;

/// Error types specific to the logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Logout use case - drops the mirrored refresh token.
///
/// The access token stays valid until it expires; clearing the refresh
/// token only prevents the session from being re-established.
pub struct LogoutUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> LogoutUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: Uuid) -> Result<(), LogoutError> {
        self.user_store
            .update_refresh_token(user_id, None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use keygate_core::{DEFAULT_ROLE, Email, Password, PendingUser, User, UserName};
    use secrecy::Secret;
    use tokio::sync::RwLock;

    use super::*;

    #[derive(Clone, Default)]
    struct MockUserStore {
        users: Arc<RwLock<Vec<User>>>,
    }

    #[async_trait::async_trait]
    impl UserStore for MockUserStore {
        async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_user_name(
            &self,
            _user_name: &UserName,
        ) -> Result<Option<User>, UserStoreError> {
            unimplemented!()
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
            Ok(self.users.read().await.iter().find(|u| u.id() == id).cloned())
        }

        async fn create(&self, _pending_user: PendingUser) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn authenticate(
            &self,
            _email: &Email,
            _password: &Password,
        ) -> Result<User, UserStoreError> {
            unimplemented!()
        }

        async fn update_refresh_token(
            &self,
            id: Uuid,
            refresh_token: Option<String>,
        ) -> Result<(), UserStoreError> {
            let mut users = self.users.write().await;
            let user = users
                .iter_mut()
                .find(|u| u.id() == id)
                .ok_or(UserStoreError::UserNotFound)?;
            user.set_refresh_token(refresh_token);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_logout_clears_the_stored_refresh_token() {
        let id = Uuid::new_v4();
        let mut user = User::new(
            id,
            UserName::try_from("abc".to_string()).unwrap(),
            Email::try_from(Secret::from("a@b.com".to_string())).unwrap(),
            Secret::from("argon2-hash".to_string()),
            DEFAULT_ROLE.to_string(),
            None,
            Utc::now(),
            Utc::now(),
        );
        user.set_refresh_token(Some("refresh-token".to_string()));

        let user_store = MockUserStore::default();
        user_store.users.write().await.push(user);

        let use_case = LogoutUseCase::new(&user_store);
        use_case.execute(id).await.unwrap();

        let stored = user_store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.refresh_token(), None);
    }

    #[tokio::test]
    async fn test_logout_for_a_missing_user_surfaces_the_store_error() {
        let user_store = MockUserStore::default();
        let use_case = LogoutUseCase::new(&user_store);

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(LogoutError::UserStoreError(UserStoreError::UserNotFound))
        ));
    }
}
