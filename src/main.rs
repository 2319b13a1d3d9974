//! Authgate Server — standalone authentication service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use authgate_api::state::AppState;
use authgate_auth::password::PasswordHasher;
use authgate_auth::session::SessionStore;
use authgate_auth::token::TokenCodec;
use authgate_cache::provider::CacheManager;
use authgate_core::config::AppConfig;
use authgate_core::error::AppError;
use authgate_database::connection::DatabasePool;
use authgate_database::repositories::user::PgUserStore;
use authgate_entity::user::store::UserStore;
use authgate_service::auth::AuthService;
use authgate_service::profile::ProfileService;

#[tokio::main]
async fn main() {
    let env = std::env::var("AUTHGATE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Authgate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;
    authgate_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Initialize cache ─────────────────────────────────
    tracing::info!(
        "Initializing cache (provider: {})...",
        config.cache.provider
    );
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // ── Step 3: Initialize auth components ───────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let codec = Arc::new(TokenCodec::new(&config.auth));
    let sessions = Arc::new(SessionStore::new(Arc::clone(&cache), &config.auth));
    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db.pool().clone()));

    // ── Step 4: Initialize services ──────────────────────────────
    let call_timeout = Duration::from_secs(config.service.external_timeout_seconds);
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&store),
        hasher,
        codec,
        sessions,
        call_timeout,
    ));
    let profile_service = Arc::new(ProfileService::new(store, call_timeout));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        auth_service,
        profile_service,
        db: db.clone(),
        cache,
    };

    let app = authgate_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Authgate listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Authgate shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
