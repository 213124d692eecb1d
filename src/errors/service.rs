use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceStatusError {
    #[error("Request body is not valid JSON")]
    InvalidBody { reason: String },

    #[error("Missing 'status' in request data")]
    MissingStatus,

    #[error("Invalid status value. Must be 'running', 'down', or 'warning'")]
    InvalidStatus { value: String },

    #[error("Service '{service_name}' not found")]
    ServiceNotFound { service_name: String },
}

impl ServiceStatusError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            ServiceStatusError::InvalidBody { .. } => ErrorCode::SERVICE_INVALID_BODY,
            ServiceStatusError::MissingStatus => ErrorCode::SERVICE_MISSING_STATUS,
            ServiceStatusError::InvalidStatus { .. } => ErrorCode::SERVICE_INVALID_STATUS,
            ServiceStatusError::ServiceNotFound { .. } => ErrorCode::SERVICE_NOT_FOUND,
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            ServiceStatusError::InvalidBody { reason } => Some(reason.clone()),
            ServiceStatusError::InvalidStatus { value } => {
                Some(format!("Received '{}'", value))
            }
            ServiceStatusError::ServiceNotFound { service_name } => Some(format!(
                "No service_status row has service_name '{}'",
                service_name
            )),
            ServiceStatusError::MissingStatus => None,
        }
    }
}
