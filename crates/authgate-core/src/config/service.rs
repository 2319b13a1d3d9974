//! Use-case service configuration.

use serde::{Deserialize, Serialize};

/// Settings governing the use-case services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Wall-clock deadline for each outbound store/cache call, in seconds.
    /// Exceeding it aborts the call and fails the enclosing use case.
    #[serde(default = "default_external_timeout")]
    pub external_timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            external_timeout_seconds: default_external_timeout(),
        }
    }
}

fn default_external_timeout() -> u64 {
    5
}
