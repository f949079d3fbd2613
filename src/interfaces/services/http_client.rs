use reqwest::{Client, Response, StatusCode, multipart::Form};
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::ClientError;
use crate::settings::ClientConfig;

/// Shared HTTP transport behind every remote service trait. All writes are
/// multipart form submissions, matching what the backend accepts.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(HttpClient {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Sync(format!("Invalid endpoint {}: {}", path, e)))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.endpoint(path)?).send().await?;
        read_json(response).await
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(self.endpoint(path)?)
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    /// Form submission where the caller only needs success or failure.
    pub(crate) async fn post_form_unit(&self, path: &str, form: Form) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.endpoint(path)?)
            .multipart(form)
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    pub(crate) async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .put(self.endpoint(path)?)
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.endpoint(path)?).send().await?;
        check_status(response).await.map(|_| ())
    }
}

/// Maps non-2xx responses to errors, keeping the body for the message.
async fn check_status(response: Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        return Ok(body);
    }

    tracing::warn!(%status, "Service call failed");
    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(body))
    } else {
        Err(ClientError::Sync(format!("service returned {}: {}", status, body)))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = check_status(response).await?;
    serde_json::from_str(&body).map_err(ClientError::from)
}
