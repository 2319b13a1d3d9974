//! Cache key builders.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses. The deployment-wide prefix is applied by
//! the Redis client, not here.

use uuid::Uuid;

/// Cache key for the active-session marker of a user.
pub fn session(user_id: Uuid) -> String {
    format!("session:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key() {
        assert_eq!(
            session(Uuid::nil()),
            "session:00000000-0000-0000-0000-000000000000"
        );
    }
}
