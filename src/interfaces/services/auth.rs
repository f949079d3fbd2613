use async_trait::async_trait;
use reqwest::multipart::Form;

use crate::entities::user::{AuthResponse, LoginRequest, RegisterRequest};
use crate::errors::ClientError;
use crate::services::http_client::HttpClient;

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError>;
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;
}

#[async_trait]
impl AuthService for HttpClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let form = Form::new()
            .text("username", request.username.clone())
            .text("email", request.email.clone())
            .text("password", request.password.clone());
        self.post_form("signup", form).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let form = Form::new()
            .text("username", request.username.clone())
            .text("password", request.password.clone());
        self.post_form("login", form).await
    }
}
