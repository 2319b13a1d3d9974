//! The authentication use cases: register, login, logout, refresh, validate.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use authgate_auth::password::PasswordHasher;
use authgate_auth::session::SessionStore;
use authgate_auth::token::TokenCodec;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::user::model::{CreateUser, CreatedUser};
use authgate_entity::user::password::Password;
use authgate_entity::user::role::UserRole;
use authgate_entity::user::store::UserStore;

/// Identical message for unknown email and wrong password, so a response
/// never reveals which one failed.
const BAD_CREDENTIALS: &str = "invalid email or password";

/// Data required to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterData {
    /// Email address (unique).
    pub email: String,
    /// Plaintext password; consumed by hashing.
    pub password: Password,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Assigned role.
    pub role: UserRole,
}

/// An access/refresh token pair returned by login and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

/// Orchestrates the credential and token lifecycle.
///
/// Stateless: each use case is a single-shot request/response; all state
/// lives in the user store and the session cache.
pub struct AuthService {
    /// User record store.
    store: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token codec.
    codec: Arc<TokenCodec>,
    /// Session marker store.
    sessions: Arc<SessionStore>,
    /// Deadline for each outbound store/cache call.
    call_timeout: Duration,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("call_timeout", &self.call_timeout)
            .finish()
    }
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        codec: Arc<TokenCodec>,
        sessions: Arc<SessionStore>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            store,
            hasher,
            codec,
            sessions,
            call_timeout,
        }
    }

    /// Registers a new user: hash the password, persist the record, and
    /// return the generated identifier with its creation timestamp.
    pub async fn register(&self, data: RegisterData) -> AppResult<CreatedUser> {
        let password_hash = self.hasher.hash(&data.password)?;

        let create = CreateUser {
            email: data.email,
            password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            phone_number: data.phone_number,
            role: data.role,
        };

        let created = self
            .bounded("register: create user", self.store.create(&create))
            .await?;

        info!(user_id = %created.id, "User registered");
        Ok(created)
    }

    /// Logs a user in: resolve the credential by email, verify the
    /// password, mint an access/refresh token pair, and record the session
    /// marker. Unknown email and wrong password are indistinguishable to
    /// the caller.
    pub async fn login(&self, email: &str, password: Password) -> AppResult<TokenPair> {
        let credential = self
            .bounded(
                "login: credential lookup",
                self.store.find_credential_by_email(email),
            )
            .await?;

        let Some(credential) = credential else {
            warn!(email, "Login attempt for unknown email");
            return Err(AppError::credential(BAD_CREDENTIALS));
        };

        if !self.hasher.verify(&password, &credential.password_hash)? {
            warn!(user_id = %credential.id, "Login attempt with wrong password");
            return Err(AppError::credential(BAD_CREDENTIALS));
        }

        let access_token = self.codec.issue_access(credential.id, credential.role)?;
        let refresh_token = self.codec.issue_refresh(credential.id)?;

        self.bounded(
            "login: session marker",
            self.sessions.record(credential.id, &refresh_token),
        )
        .await?;

        info!(user_id = %credential.id, "Login successful");
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Logs a user out by clearing the session marker. The marker may
    /// already be absent; clearing is idempotent.
    pub async fn logout(&self, email: &str) -> AppResult<()> {
        let credential = self
            .bounded(
                "logout: user lookup",
                self.store.find_credential_by_email(email),
            )
            .await?;

        let Some(credential) = credential else {
            // Internally a missing record; externally indistinguishable
            // from any other lookup failure.
            warn!(email, "Logout requested for unknown email");
            return Err(AppError::internal("could not resolve user record"));
        };

        self.bounded("logout: session clear", self.sessions.clear(credential.id))
            .await?;

        info!(user_id = %credential.id, "Logout completed");
        Ok(())
    }

    /// Exchanges a valid refresh token for a new access token. The role is
    /// re-read from the store, so an access token minted here never carries
    /// a stale role. The refresh token is echoed back unchanged.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.codec.validate_refresh(refresh_token)?;
        let user_id = claims.user_id();

        let role = self
            .bounded("refresh: role lookup", self.store.find_role_by_id(user_id))
            .await?;

        let Some(role) = role else {
            warn!(%user_id, "Refresh for unknown user");
            return Err(AppError::internal("could not resolve user role"));
        };

        let access_token = self.codec.issue_access(user_id, role)?;

        Ok(TokenPair {
            access_token,
            refresh_token: refresh_token.to_string(),
        })
    }

    /// Validates an access token by signature and expiry alone. Session
    /// markers are not consulted: a token issued before logout stays valid
    /// until it expires.
    pub async fn validate(&self, access_token: &str) -> AppResult<()> {
        self.codec.validate_access(access_token)?;
        Ok(())
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
    use crate::testing::{InMemoryUserStore, SlowStore, test_auth_config};

    use authgate_cache::memory::MemoryCacheProvider;
    use authgate_cache::provider::CacheManager;
    use authgate_core::config::cache::MemoryCacheConfig;
    use authgate_core::error::ErrorKind;
    use authgate_core::traits::cache::CacheProvider;

    struct Harness {
        service: AuthService,
        store: Arc<InMemoryUserStore>,
        codec: Arc<TokenCodec>,
        cache: Arc<CacheManager>,
    }

    fn harness() -> Harness {
        harness_with_timeout(Duration::from_secs(5))
    }

    fn harness_with_timeout(call_timeout: Duration) -> Harness {
        let store = Arc::new(InMemoryUserStore::new());
        build(store.clone(), store, call_timeout)
    }

    fn build(
        store: Arc<InMemoryUserStore>,
        as_store: Arc<dyn UserStore>,
        call_timeout: Duration,
    ) -> Harness {
        let config = test_auth_config();
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 100 });
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
        let codec = Arc::new(TokenCodec::new(&config));
        let sessions = Arc::new(SessionStore::new(cache.clone(), &config));

        let service = AuthService::new(
            as_store,
            Arc::new(PasswordHasher::new()),
            codec.clone(),
            sessions,
            call_timeout,
        );

        Harness {
            service,
            store,
            codec,
            cache,
        }
    }

    fn register_data(email: &str) -> RegisterData {
        RegisterData {
            email: email.to_string(),
            password: Password::new("pw123"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "+4400000000".to_string(),
            role: UserRole::Customer,
        }
    }

    #[tokio::test]
    async fn test_register_returns_id_and_stores_hash() {
        let h = harness();

        let created = h.service.register(register_data("a@b.com")).await.unwrap();
        assert!(!created.id.is_nil());

        let credential = h
            .store
            .find_credential_by_email("a@b.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(credential.id, created.id);
        assert_ne!(credential.password_hash, "pw123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_database_error() {
        let h = harness();

        h.service.register(register_data("a@b.com")).await.unwrap();
        let err = h.service.register(register_data("a@b.com")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_login_yields_valid_tokens_and_marker() {
        let h = harness();
        let created = h.service.register(register_data("a@b.com")).await.unwrap();

        let tokens = h
            .service
            .login("a@b.com", Password::new("pw123"))
            .await
            .unwrap();

        let claims = h.codec.validate_access(&tokens.access_token).unwrap();
        assert_eq!(claims.user_id(), created.id);
        assert_eq!(claims.role, UserRole::Customer);

        let marker_key = format!("session:{}", created.id);
        assert_eq!(
            h.cache.get(&marker_key).await.unwrap().as_deref(),
            Some(tokens.refresh_token.as_str())
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_credential_error() {
        let h = harness();
        h.service.register(register_data("a@b.com")).await.unwrap();

        let err = h
            .service
            .login("a@b.com", Password::new("wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Credential);
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_indistinguishable() {
        let h = harness();
        h.service.register(register_data("a@b.com")).await.unwrap();

        let wrong_password = h
            .service
            .login("a@b.com", Password::new("wrong"))
            .await
            .unwrap_err();
        let unknown_email = h
            .service
            .login("nobody@b.com", Password::new("pw123"))
            .await
            .unwrap_err();

        assert_eq!(unknown_email.kind, ErrorKind::Credential);
        assert_eq!(unknown_email.message, wrong_password.message);
    }

    #[tokio::test]
    async fn test_refresh_mints_new_access_and_echoes_refresh() {
        let h = harness();
        h.service.register(register_data("a@b.com")).await.unwrap();
        let first = h
            .service
            .login("a@b.com", Password::new("pw123"))
            .await
            .unwrap();

        // Issued-at has one-second granularity; step past it so the new
        // access token differs.
        tokio::time::sleep(Duration::from_millis(1100)).await;

        let second = h.service.refresh(&first.refresh_token).await.unwrap();
        assert_ne!(second.access_token, first.access_token);
        assert_eq!(second.refresh_token, first.refresh_token);

        h.codec.validate_access(&second.access_token).unwrap();
    }

    #[tokio::test]
    async fn test_refresh_picks_up_role_change() {
        let h = harness();
        let created = h.service.register(register_data("a@b.com")).await.unwrap();
        let tokens = h
            .service
            .login("a@b.com", Password::new("pw123"))
            .await
            .unwrap();

        h.store.set_role(created.id, UserRole::Operator).await;

        let refreshed = h.service.refresh(&tokens.refresh_token).await.unwrap();
        let claims = h.codec.validate_access(&refreshed.access_token).unwrap();
        assert_eq!(claims.role, UserRole::Operator);
    }

    #[tokio::test]
    async fn test_refresh_with_garbage_token_is_token_error() {
        let h = harness();

        let err = h.service.refresh("not.a.token").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Token);
    }

    #[tokio::test]
    async fn test_validate_accepts_issued_and_rejects_tampered() {
        let h = harness();
        h.service.register(register_data("a@b.com")).await.unwrap();
        let tokens = h
            .service
            .login("a@b.com", Password::new("pw123"))
            .await
            .unwrap();

        h.service.validate(&tokens.access_token).await.unwrap();

        let err = h
            .service
            .validate(&tokens.refresh_token)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Token);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let h = harness();
        let created = h.service.register(register_data("a@b.com")).await.unwrap();
        h.service
            .login("a@b.com", Password::new("pw123"))
            .await
            .unwrap();

        h.service.logout("a@b.com").await.unwrap();
        let marker_key = format!("session:{}", created.id);
        assert!(!h.cache.exists(&marker_key).await.unwrap());

        h.service.logout("a@b.com").await.unwrap();
    }

    #[tokio::test]
    async fn test_logout_unknown_email_is_generic_failure() {
        let h = harness();

        let err = h.service.logout("nobody@b.com").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_slow_store_hits_call_deadline() {
        let inner = Arc::new(InMemoryUserStore::new());
        let slow = Arc::new(SlowStore::new(inner.clone(), Duration::from_millis(100)));
        let h = build(inner, slow, Duration::from_millis(10));

        let err = h
            .service
            .login("a@b.com", Password::new("pw123"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Timeout);
    }
}
