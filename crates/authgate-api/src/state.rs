//! Application state shared across all handlers.

use std::sync::Arc;

use authgate_cache::provider::CacheManager;
use authgate_core::config::AppConfig;
use authgate_database::connection::DatabasePool;
use authgate_service::auth::AuthService;
use authgate_service::profile::ProfileService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or internally pooled for cheap cloning
/// across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Credential and token lifecycle service.
    pub auth_service: Arc<AuthService>,
    /// Profile read/update service.
    pub profile_service: Arc<ProfileService>,
    /// Database pool, used by the health probe.
    pub db: DatabasePool,
    /// Cache manager, used by the health probe.
    pub cache: Arc<CacheManager>,
}
