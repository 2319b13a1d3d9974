//! Transient plaintext password wrapper.

use std::fmt;

use serde::Deserialize;

/// A plaintext password in transit.
///
/// Exists only between request deserialization and hashing/verification,
/// after which it is dropped. It deliberately implements neither
/// `Serialize` nor a revealing `Debug`, so it cannot end up in a persisted
/// structure or a log line.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    /// Wrap a raw password string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the plaintext for hashing or verification.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the password is empty (rejected at validation).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("hunter2");
        assert_eq!(format!("{password:?}"), "Password(****)");
    }

    #[test]
    fn test_expose_returns_plaintext() {
        let password = Password::new("pw123");
        assert_eq!(password.expose(), "pw123");
        assert!(!password.is_empty());
    }
}
