use validator::Validate;

use crate::entities::user::{AuthResponse, LoginRequest, RegisterRequest};
use crate::errors::ClientError;
use crate::services::auth::AuthService;

pub struct AuthHandler<S>
where
    S: AuthService,
{
    pub auth_service: S,
}

impl<S> AuthHandler<S>
where
    S: AuthService,
{
    pub fn new(auth_service: S) -> Self {
        AuthHandler { auth_service }
    }

    /// Registers a new user after client-side validation
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        request.validate()?;

        let response = self.auth_service.register(request).await?;

        tracing::info!(user_id = response.user_id, "User registered");
        Ok(response)
    }

    /// Logs in and returns the session identity used by every other call
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        request.validate()?;

        let response = self.auth_service.login(request).await?;

        tracing::info!(user_id = response.user_id, "User logged in");
        Ok(response)
    }
}
