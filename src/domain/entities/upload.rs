use crate::constants::MAX_UPLOAD_BYTES;
use crate::errors::{ClientError, FieldError};

/// An in-memory file selected for upload (resume or study material).
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        FileUpload {
            file_name: file_name.to_string(),
            bytes,
        }
    }

    /// Checked client-side before any network call.
    pub fn validate(&self) -> Result<(), ClientError> {
        let mut errors = Vec::new();

        if self.file_name.trim().is_empty() {
            errors.push(FieldError::new("file_name", "File name is required"));
        }
        if self.bytes.is_empty() {
            errors.push(FieldError::new("file", "File is empty"));
        }
        if self.bytes.len() > MAX_UPLOAD_BYTES {
            errors.push(FieldError::new("file", "File exceeds the upload size limit"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ClientError::Validation(errors))
        }
    }
}
