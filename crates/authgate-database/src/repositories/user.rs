//! PostgreSQL user-store adapter.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;
use authgate_entity::user::model::{
    CreateUser, CreatedUser, Credential, Profile, ProfileUpdate, UpdateProfile,
};
use authgate_entity::user::role::UserRole;
use authgate_entity::user::store::UserStore;

/// PostgreSQL-backed [`UserStore`] implementation.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, data: &CreateUser) -> AppResult<CreatedUser> {
        sqlx::query_as::<_, CreatedUser>(
            "INSERT INTO users (email, password_hash, first_name, last_name, phone_number, role) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, created_at",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone_number)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::database(format!("Email '{}' is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>(
            "SELECT email, first_name, last_name, phone_number, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        data: &UpdateProfile,
    ) -> AppResult<Option<ProfileUpdate>> {
        sqlx::query_as::<_, ProfileUpdate>(
            "UPDATE users SET email = $2, first_name = $3, last_name = $4, \
                              phone_number = $5, updated_at = NOW() \
             WHERE id = $1 RETURNING id, updated_at",
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))
    }

    async fn find_credential_by_email(&self, email: &str) -> AppResult<Option<Credential>> {
        sqlx::query_as::<_, Credential>(
            "SELECT id, password_hash, role FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find credential by email", e)
        })
    }

    async fn find_role_by_id(&self, id: Uuid) -> AppResult<Option<UserRole>> {
        sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find role by id", e)
            })
    }
}
