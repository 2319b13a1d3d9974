//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Signing keys and lifetimes for the two token classes.
///
/// Access and refresh tokens are signed with disjoint secrets so that
/// rotation or compromise of one class never affects the other, and a
/// refresh token can never pass verification in the access context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    #[serde(default = "default_access_secret")]
    pub access_token_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    #[serde(default = "default_refresh_secret")]
    pub refresh_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_hours: u64,
    /// Clock-skew leeway applied during validation, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_access_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION_ACCESS".to_string()
}

fn default_refresh_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION_REFRESH".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    72
}

fn default_leeway() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secrets_are_disjoint() {
        assert_ne!(default_access_secret(), default_refresh_secret());
    }
}
