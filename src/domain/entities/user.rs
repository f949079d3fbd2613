use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Session identity returned by signup and login. Callers pass `user_id`
/// into every profile and study-set operation explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
}
