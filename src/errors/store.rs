use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to connect to database")]
    ConnectionFailed { reason: String },

    #[error("Failed to {operation}")]
    QueryFailed { operation: String, reason: String },

    #[error("Database call '{operation}' did not finish within {seconds}s")]
    Timeout { operation: String, seconds: u64 },
}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            StoreError::ConnectionFailed { .. } => ErrorCode::STORE_CONNECTION_FAILED,
            StoreError::QueryFailed { .. } => ErrorCode::STORE_QUERY_FAILED,
            StoreError::Timeout { .. } => ErrorCode::STORE_TIMEOUT,
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            StoreError::ConnectionFailed { reason } | StoreError::QueryFailed { reason, .. } => {
                Some(reason.clone())
            }
            StoreError::Timeout { operation, seconds } => Some(format!(
                "'{}' exceeded the {}s database timeout",
                operation, seconds
            )),
        }
    }
}
