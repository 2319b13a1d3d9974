//! # authgate-api
//!
//! HTTP API layer for Authgate built on Axum.
//!
//! Provides the auth and profile endpoints, request/response DTOs,
//! error-to-status mapping, and request logging middleware.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
