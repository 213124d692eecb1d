use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid path parameter")]
    InvalidPath { reason: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            RequestError::InvalidPath { .. } => ErrorCode::REQUEST_INVALID_PATH,
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            RequestError::InvalidPath { reason } => Some(reason.clone()),
        }
    }
}
