//! Authentication request types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// New-account payload for `POST /api/auth/register`.
///
/// Validation bounds match the backend's binding rules; the optional
/// profile fields are skipped on the wire when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 20))]
    pub username: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// "male", "female" or "other"; the backend rejects anything else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// ISO date, e.g. "1995-04-12".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Height in centimeters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// Weight in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

impl RegisterRequest {
    /// Minimal registration with the three required fields.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            nickname: None,
            gender: None,
            birth_date: None,
            height: None,
            weight: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validation_bounds() {
        let ok = RegisterRequest::new("carol", "secret1", "carol@example.com");
        assert!(ok.validate().is_ok());

        let short_name = RegisterRequest::new("ab", "secret1", "carol@example.com");
        assert!(short_name.validate().is_err());

        let short_password = RegisterRequest::new("carol", "12345", "carol@example.com");
        assert!(short_password.validate().is_err());

        let bad_email = RegisterRequest::new("carol", "secret1", "not-an-email");
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_optional_fields_skipped_on_wire() {
        let body = serde_json::to_value(LoginRequest::new("a", "b")).unwrap();
        assert_eq!(body, serde_json::json!({"username": "a", "password": "b"}));

        let body = serde_json::to_value(RegisterRequest::new("carol", "secret1", "c@example.com"))
            .unwrap();
        assert!(body.get("nickname").is_none());
        assert!(body.get("height").is_none());
    }
}
