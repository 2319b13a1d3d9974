//! Claims embedded in access and refresh tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use authgate_entity::user::role::UserRole;

/// Claims payload of an access token.
///
/// The signature covers every field, so none can be altered without
/// failing validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Claims payload of a refresh token. Carries no role; the current role is
/// re-read from the store when a new access token is minted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl AccessClaims {
    /// Returns the user ID from the subject claim.
    ///
    /// Only meaningful on claims returned by a successful validation.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}

impl RefreshClaims {
    /// Returns the user ID from the subject claim.
    ///
    /// Only meaningful on claims returned by a successful validation.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}
