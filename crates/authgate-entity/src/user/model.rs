//! User record projections exchanged with the user store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// Data required to create a new user record.
///
/// Carries the already-hashed password; plaintext never reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address (unique across users).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Result of a successful user creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CreatedUser {
    /// The generated user identifier.
    pub id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Login projection of a user record: identifier, stored hash, and role.
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    /// User identifier.
    pub id: Uuid,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Role at the time of lookup.
    pub role: UserRole,
}

/// Profile fields readable by the profile service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Profile fields the owner may change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New email address.
    pub email: String,
    /// New given name.
    pub first_name: String,
    /// New family name.
    pub last_name: String,
    /// New contact phone number.
    pub phone_number: String,
}

/// Result of a successful profile update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileUpdate {
    /// The updated user identifier.
    pub id: Uuid,
    /// When the update was applied.
    pub updated_at: DateTime<Utc>,
}
