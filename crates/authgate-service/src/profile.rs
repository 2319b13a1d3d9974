//! Profile read/update plumbing around the user store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::user::model::{Profile, ProfileUpdate, UpdateProfile};
use authgate_entity::user::store::UserStore;

/// Reads and updates user profile fields.
pub struct ProfileService {
    /// User record store.
    store: Arc<dyn UserStore>,
    /// Deadline for each outbound store call.
    call_timeout: Duration,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService")
            .field("call_timeout", &self.call_timeout)
            .finish()
    }
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(store: Arc<dyn UserStore>, call_timeout: Duration) -> Self {
        Self {
            store,
            call_timeout,
        }
    }

    /// Reads the profile of a user.
    pub async fn get_profile(&self, id: Uuid) -> AppResult<Profile> {
        self.bounded("get profile: lookup", self.store.find_by_id(id))
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))
    }

    /// Updates the profile of a user, returning the update receipt.
    pub async fn update_profile(&self, id: Uuid, data: UpdateProfile) -> AppResult<ProfileUpdate> {
        let updated = self
            .bounded("update profile: update", self.store.update_profile(id, &data))
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))?;

        info!(user_id = %updated.id, "Profile updated");
        Ok(updated)
    }

    /// Runs an outbound call under the configured deadline, wrapping any
    /// failure with use-case context.
    async fn bounded<T, F>(&self, what: &'static str, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(result) => result.map_err(|e| e.context(what)),
            Err(_) => Err(AppError::timeout(format!(
                "{what}: deadline of {:?} exceeded",
                self.call_timeout
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryUserStore;

    use authgate_core::error::ErrorKind;
    use authgate_entity::user::model::CreateUser;
    use authgate_entity::user::role::UserRole;

    async fn seeded() -> (ProfileService, Uuid) {
        let store = Arc::new(InMemoryUserStore::new());
        let created = store
            .create(&CreateUser {
                email: "a@b.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                phone_number: "+4400000000".to_string(),
                role: UserRole::Customer,
            })
            .await
            .unwrap();

        let service = ProfileService::new(store, Duration::from_secs(5));
        (service, created.id)
    }

    #[tokio::test]
    async fn test_get_profile_round_trip() {
        let (service, id) = seeded().await;

        let profile = service.get_profile(id).await.unwrap();
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_get_profile_unknown_id_is_not_found() {
        let (service, _) = seeded().await;

        let err = service.get_profile(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_profile_changes_fields() {
        let (service, id) = seeded().await;

        let updated = service
            .update_profile(
                id,
                UpdateProfile {
                    email: "new@b.com".to_string(),
                    first_name: "Ada".to_string(),
                    last_name: "King".to_string(),
                    phone_number: "+4411111111".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, id);

        let profile = service.get_profile(id).await.unwrap();
        assert_eq!(profile.email, "new@b.com");
        assert_eq!(profile.last_name, "King");
    }
}
