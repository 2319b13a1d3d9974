//! In-memory fakes used by the service tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::user::model::{
    CreateUser, CreatedUser, Credential, Profile, ProfileUpdate, UpdateProfile,
};
use authgate_entity::user::role::UserRole;
use authgate_entity::user::store::UserStore;

use authgate_core::config::AuthConfig;

/// Auth configuration used across service tests.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        access_token_secret: "access-secret-for-tests".to_string(),
        refresh_token_secret: "refresh-secret-for-tests".to_string(),
        access_ttl_minutes: 15,
        refresh_ttl_hours: 72,
        leeway_seconds: 5,
    }
}

/// One stored user row.
#[derive(Debug, Clone)]
struct StoredUser {
    id: Uuid,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    role: UserRole,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

/// In-memory [`UserStore`] with the same observable behavior as the
/// PostgreSQL adapter, including the unique-email rejection.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, StoredUser>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes a user's role out-of-band, as an admin would.
    pub async fn set_role(&self, id: Uuid, role: UserRole) {
        if let Some(user) = self.users.write().await.get_mut(&id) {
            user.role = role;
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, data: &CreateUser) -> AppResult<CreatedUser> {
        let mut users = self.users.write().await;

        let duplicate = users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email));
        if duplicate {
            return Err(AppError::database(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }

        let now = Utc::now();
        let user = StoredUser {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            phone_number: data.phone_number.clone(),
            role: data.role,
            created_at: now,
            updated_at: now,
        };

        let created = CreatedUser {
            id: user.id,
            created_at: user.created_at,
        };
        users.insert(user.id, user);
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.users.read().await.get(&id).map(|u| Profile {
            email: u.email.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            phone_number: u.phone_number.clone(),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        data: &UpdateProfile,
    ) -> AppResult<Option<ProfileUpdate>> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|u| {
            u.email = data.email.clone();
            u.first_name = data.first_name.clone();
            u.last_name = data.last_name.clone();
            u.phone_number = data.phone_number.clone();
            u.updated_at = Utc::now();
            ProfileUpdate {
                id: u.id,
                updated_at: u.updated_at,
            }
        }))
    }

    async fn find_credential_by_email(&self, email: &str) -> AppResult<Option<Credential>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| Credential {
                id: u.id,
                password_hash: u.password_hash.clone(),
                role: u.role,
            }))
    }

    async fn find_role_by_id(&self, id: Uuid) -> AppResult<Option<UserRole>> {
        Ok(self.users.read().await.get(&id).map(|u| u.role))
    }
}

/// Wraps a store and delays every call, for exercising call deadlines.
#[derive(Debug)]
pub struct SlowStore {
    inner: Arc<InMemoryUserStore>,
    delay: Duration,
}

impl SlowStore {
    pub fn new(inner: Arc<InMemoryUserStore>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl UserStore for SlowStore {
    async fn create(&self, data: &CreateUser) -> AppResult<CreatedUser> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(data).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_id(id).await
    }

    async fn update_profile(
        &self,
        id: Uuid,
        data: &UpdateProfile,
    ) -> AppResult<Option<ProfileUpdate>> {
        tokio::time::sleep(self.delay).await;
        self.inner.update_profile(id, data).await
    }

    async fn find_credential_by_email(&self, email: &str) -> AppResult<Option<Credential>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_credential_by_email(email).await
    }

    async fn find_role_by_id(&self, id: Uuid) -> AppResult<Option<UserRole>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_role_by_id(id).await
    }
}
