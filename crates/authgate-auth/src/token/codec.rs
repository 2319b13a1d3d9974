//! Token creation and validation with per-class signing contexts.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use authgate_core::config::AuthConfig;
use authgate_core::error::AppError;
use authgate_entity::user::role::UserRole;

use super::claims::{AccessClaims, RefreshClaims};
use super::error::TokenError;

/// One token class: its key pair, validation rules, and lifetime.
struct SigningContext {
    /// HMAC key for signing.
    encoding_key: EncodingKey,
    /// HMAC key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration (expiry, leeway).
    validation: Validation,
    /// Token lifetime.
    ttl: Duration,
}

impl SigningContext {
    fn new(secret: &str, ttl: Duration, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_seconds;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }
}

/// Creates and validates signed access and refresh tokens.
///
/// The two contexts use disjoint secrets, so a token of one class never
/// passes verification in the other, and rotating one secret leaves the
/// other class untouched.
pub struct TokenCodec {
    access: SigningContext,
    refresh: SigningContext,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_ttl", &self.access.ttl)
            .field("refresh_ttl", &self.refresh.ttl)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access: SigningContext::new(
                &config.access_token_secret,
                Duration::minutes(config.access_ttl_minutes as i64),
                config.leeway_seconds,
            ),
            refresh: SigningContext::new(
                &config.refresh_token_secret,
                Duration::hours(config.refresh_ttl_hours as i64),
                config.leeway_seconds,
            ),
        }
    }

    /// Issues an access token for the given user and role.
    pub fn issue_access(&self, user_id: Uuid, role: UserRole) -> Result<String, AppError> {
        self.issue_access_at(user_id, role, Utc::now())
    }

    /// Issues an access token with an explicit issuance instant.
    pub fn issue_access_at(
        &self,
        user_id: Uuid,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = AccessClaims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: (now + self.access.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.access.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }

    /// Issues a refresh token for the given user.
    pub fn issue_refresh(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_refresh_at(user_id, Utc::now())
    }

    /// Issues a refresh token with an explicit issuance instant.
    pub fn issue_refresh_at(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = RefreshClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.refresh.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.refresh.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))
    }

    /// Validates an access token: signature against the access key, then
    /// expiry. Returns the embedded claims on success.
    pub fn validate_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        decode::<AccessClaims>(token, &self.access.decoding_key, &self.access.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    /// Validates a refresh token against the refresh signing context.
    pub fn validate_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        decode::<RefreshClaims>(token, &self.refresh.decoding_key, &self.refresh.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
        _ => TokenError::Malformed(err.to_string()),
    }
}
