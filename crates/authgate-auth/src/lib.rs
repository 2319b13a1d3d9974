//! # authgate-auth
//!
//! Cryptographic building blocks of the credential and token lifecycle:
//!
//! - `password` — Argon2id password hashing and verification
//! - `token` — signed access/refresh token issuance and validation,
//!   with disjoint signing contexts per token class
//! - `session` — cache-backed session markers cleared on logout

pub mod password;
pub mod session;
pub mod token;

pub use password::PasswordHasher;
pub use session::SessionStore;
pub use token::{AccessClaims, RefreshClaims, TokenCodec, TokenError};
