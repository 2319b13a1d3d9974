//! Request DTOs with validation.

use serde::Deserialize;
use validator::Validate;

use authgate_entity::user::password::Password;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password; checked for presence in the handler.
    pub password: Password,
    /// Given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    /// Requested role name.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    pub password: Password,
}

/// Logout query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutParams {
    /// Email address of the account to log out.
    pub email: Option<String>,
}

/// Token refresh request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token.
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Access token validation request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidateRequest {
    /// Access token.
    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,
}

/// Profile update request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// New given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// New family name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// New contact phone number.
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_bad_email() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            password: Password::new("pw123"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "+4400000000".to_string(),
            role: "customer".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_refresh_request_rejects_empty_token() {
        let req = RefreshRequest {
            refresh_token: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
