use chrono::{DateTime, Utc};
use keygate_core::{Email, Password, PendingUser, User, UserName, UserStore, UserStoreError};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::password_hash::{compute_password_hash, verify_password_hash};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }

    async fn fetch_one_where(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<User>, UserStoreError> {
        // Column names come from the callers below, never from user input.
        let sql = format!(
            "SELECT id, user_name, email, password_hash, role, refresh_token, created_at, updated_at \
             FROM users WHERE {column} = $1"
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Finding user by email in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        self.fetch_one_where("email", email.as_ref().expose_secret())
            .await
    }

    #[tracing::instrument(name = "Finding user by user name in PostgreSQL", skip_all)]
    async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<User>, UserStoreError> {
        self.fetch_one_where("user_name", user_name.as_str()).await
    }

    #[tracing::instrument(name = "Finding user by id in PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, user_name, email, password_hash, role, refresh_token, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, pending_user: PendingUser) -> Result<User, UserStoreError> {
        let (user_name, email, password) = pending_user.into_parts();
        let password_hash = compute_password_hash(password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (user_name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING id, user_name, email, password_hash, role, refresh_token, created_at, updated_at",
        )
        .bind(user_name.as_str())
        .bind(email.as_ref().expose_secret())
        .bind(password_hash.expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        row.into_user()
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
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

    #[tracing::instrument(name = "Updating refresh token in PostgreSQL", skip_all)]
    async fn update_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<String>,
    ) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            "UPDATE users SET refresh_token = $1, updated_at = now() WHERE id = $2",
        )
        .bind(refresh_token)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    user_name: String,
    email: String,
    password_hash: String,
    role: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        let user_name = UserName::try_from(self.user_name)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let email = Email::try_from(Secret::from(self.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::new(
            self.id,
            user_name,
            email,
            Secret::from(self.password_hash),
            self.role,
            self.refresh_token,
            self.created_at,
            self.updated_at,
        ))
    }
}
