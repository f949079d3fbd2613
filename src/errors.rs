use std::fmt;

use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum ClientError {
    Validation(Vec<FieldError>),
    Sync(String),
    Decode(String),
    NotFound(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(errors) => {
                let messages = errors.iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            ClientError::Sync(msg) => write!(f, "Sync failed: {}", msg),
            ClientError::Decode(msg) => write!(f, "Malformed service payload: {}", msg),
            ClientError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    /// True when the operation was rejected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<ValidationErrors> for ClientError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        ClientError::Validation(field_errors)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Sync(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Display)]
#[display("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
