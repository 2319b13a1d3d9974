//! Signed token issuance, validation, and claims.

pub mod claims;
pub mod codec;
pub mod error;

pub use claims::{AccessClaims, RefreshClaims};
pub use codec::TokenCodec;
pub use error::TokenError;
