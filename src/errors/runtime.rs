use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Failed to run '{command}'")]
    CommandFailed { command: String, reason: String },

    #[error("Failed to get container '{id}'")]
    ContainerNotFound { id: String, reason: String },

    #[error("Failed to parse output of '{command}'")]
    ParseFailed { command: String, reason: String },

    #[error("'{command}' did not finish within {seconds}s")]
    Timeout { command: String, seconds: u64 },
}

impl RuntimeError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            RuntimeError::CommandFailed { .. } => ErrorCode::RUNTIME_COMMAND_FAILED,
            RuntimeError::ContainerNotFound { .. } => ErrorCode::RUNTIME_CONTAINER_NOT_FOUND,
            RuntimeError::ParseFailed { .. } => ErrorCode::RUNTIME_OUTPUT_PARSE_FAILED,
            RuntimeError::Timeout { .. } => ErrorCode::RUNTIME_COMMAND_TIMEOUT,
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            RuntimeError::CommandFailed { reason, .. }
            | RuntimeError::ContainerNotFound { reason, .. }
            | RuntimeError::ParseFailed { reason, .. } => Some(reason.clone()),
            RuntimeError::Timeout { command, seconds } => Some(format!(
                "'{}' was killed after {}s without exiting",
                command, seconds
            )),
        }
    }
}
