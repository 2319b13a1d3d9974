//! # authgate-core
//!
//! Core crate for Authgate. Contains configuration schemas, the unified
//! error system, and the cache provider trait.
//!
//! This crate has **no** internal dependencies on other Authgate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
