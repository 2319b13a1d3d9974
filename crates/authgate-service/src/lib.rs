//! # authgate-service
//!
//! Use-case services. [`auth::AuthService`] implements the credential and
//! token lifecycle (register, login, logout, refresh, validate);
//! [`profile::ProfileService`] implements profile read/update. Both bound
//! every outbound store/cache call with a wall-clock timeout and never
//! retry; retries belong to the caller.

pub mod auth;
pub mod profile;

#[cfg(test)]
mod testing;

pub use auth::{AuthService, RegisterData, TokenPair};
pub use profile::ProfileService;
