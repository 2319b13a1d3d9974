//! Token validation failure taxonomy.

use thiserror::Error;

use authgate_core::error::{AppError, ErrorKind};

/// Why a token was rejected. All variants are terminal for the current
/// request; the caller surfaces them as unauthorized without retrying.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signature does not verify against the expected signing key.
    #[error("token signature is invalid")]
    SignatureInvalid,

    /// The token's expiry timestamp is in the past.
    #[error("token has expired")]
    Expired,

    /// The token is not structurally a valid signed token.
    #[error("token is malformed: {0}")]
    Malformed(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::new(ErrorKind::Token, err.to_string())
    }
}
