//! Session marker storage over the cache.
//!
//! A marker is an association `user id -> opaque session value` held in the
//! external cache. It is written on login and deleted on logout; the cache
//! owns its lifetime beyond that (the marker carries the refresh TTL).

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use authgate_cache::keys;
use authgate_cache::provider::CacheManager;
use authgate_core::config::AuthConfig;
use authgate_core::result::AppResult;
use authgate_core::traits::cache::CacheProvider;

/// Stores and clears per-user session markers.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Cache manager backing the markers.
    cache: Arc<CacheManager>,
    /// Marker lifetime, matching the refresh token TTL.
    marker_ttl: Duration,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(cache: Arc<CacheManager>, config: &AuthConfig) -> Self {
        Self {
            cache,
            marker_ttl: Duration::from_secs(config.refresh_ttl_hours * 3600),
        }
    }

    /// Records a session marker for the user. Overwrites any previous
    /// marker, so concurrent logins each leave a single current marker.
    pub async fn record(&self, user_id: Uuid, marker: &str) -> AppResult<()> {
        self.cache
            .set(&keys::session(user_id), marker, self.marker_ttl)
            .await?;
        debug!(%user_id, "Session marker recorded");
        Ok(())
    }

    /// Clears the session marker for the user. Idempotent: clearing an
    /// absent marker succeeds.
    pub async fn clear(&self, user_id: Uuid) -> AppResult<()> {
        self.cache.delete(&keys::session(user_id)).await?;
        debug!(%user_id, "Session marker cleared");
        Ok(())
    }
}
