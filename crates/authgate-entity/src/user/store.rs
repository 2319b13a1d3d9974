//! The user-store contract.

use async_trait::async_trait;
use uuid::Uuid;

use authgate_core::result::AppResult;

use super::model::{CreateUser, CreatedUser, Credential, Profile, ProfileUpdate, UpdateProfile};
use super::role::UserRole;

/// Persistent user-record store.
///
/// Implemented by the PostgreSQL adapter in production and by an in-memory
/// fake in service tests. Absent records are `Ok(None)`, never errors; the
/// calling service decides how absence surfaces.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert a new user record, returning its identifier and creation time.
    ///
    /// Fails with a database-kind error on any rejection, including a
    /// unique-email conflict.
    async fn create(&self, data: &CreateUser) -> AppResult<CreatedUser>;

    /// Read the profile fields of a user by identifier.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>>;

    /// Update the profile fields of a user, returning the update receipt.
    async fn update_profile(
        &self,
        id: Uuid,
        data: &UpdateProfile,
    ) -> AppResult<Option<ProfileUpdate>>;

    /// Read the login credential projection (id, hash, role) by email.
    async fn find_credential_by_email(&self, email: &str) -> AppResult<Option<Credential>>;

    /// Read only the current role of a user by identifier.
    async fn find_role_by_id(&self, id: Uuid) -> AppResult<Option<UserRole>>;
}
