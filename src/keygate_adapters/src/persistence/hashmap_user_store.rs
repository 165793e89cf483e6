use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::Utc;
use keygate_core::{
    DEFAULT_ROLE, Email, Password, PendingUser, User, UserName, UserStore, UserStoreError,
};
use uuid::Uuid;

use super::password_hash::{compute_password_hash, verify_password_hash};

/// In-memory store for tests and local development. Hashes passwords with
/// the same argon2 parameters as the Postgres store so login flows behave
/// identically.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|user| user.user_name() == user_name)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, pending_user: PendingUser) -> Result<User, UserStoreError> {
        let (user_name, email, password) = pending_user.into_parts();
        let password_hash = compute_password_hash(password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let mut users = self.users.write().await;
        let taken = users
            .values()
            .any(|user| user.email() == &email || user.user_name() == &user_name);
        if taken {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User::new(
            Uuid::new_v4(),
            user_name,
            email,
            password_hash,
            DEFAULT_ROLE.to_string(),
            None,
            now,
            now,
        );
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn authenticate(&self, email: &Email, password: &Password) -> Result<User, UserStoreError> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or(UserStoreError::UserNotFound)?;

        verify_password_hash(user.password_hash().clone(), password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        Ok(user)
    }

    async fn update_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<String>,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(UserStoreError::UserNotFound)?;
        user.set_refresh_token(refresh_token);
        Ok(())
    }
}
