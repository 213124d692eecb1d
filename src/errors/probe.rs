use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to read disk usage")]
    DiskNotFound { mount_point: String },

    #[error("Failed to read memory usage")]
    MemoryUnavailable,

    #[error("Failed to sample host resources")]
    SampleFailed { reason: String },
}

impl ProbeError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            ProbeError::DiskNotFound { .. } => ErrorCode::PROBE_DISK_NOT_FOUND,
            ProbeError::MemoryUnavailable => ErrorCode::PROBE_MEMORY_UNAVAILABLE,
            ProbeError::SampleFailed { .. } => ErrorCode::PROBE_SAMPLE_FAILED,
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            ProbeError::SampleFailed { reason } => Some(reason.clone()),
            ProbeError::DiskNotFound { mount_point } => {
                Some(format!("No disk is mounted at '{}'", mount_point))
            }
            ProbeError::MemoryUnavailable => {
                Some("The host reported zero total memory".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_missing_disk_when_details_requested_then_mount_point_is_reported() {
        let err = ProbeError::DiskNotFound {
            mount_point: "/data".to_string(),
        };

        assert_eq!(
            err.details().as_deref(),
            Some("No disk is mounted at '/data'")
        );
    }

    #[test]
    fn given_every_variant_when_details_requested_then_none_are_empty() {
        let errors = [
            ProbeError::DiskNotFound {
                mount_point: "/".to_string(),
            },
            ProbeError::MemoryUnavailable,
            ProbeError::SampleFailed {
                reason: "task panicked".to_string(),
            },
        ];

        for err in errors {
            assert!(err.details().is_some(), "{:?} has no details", err);
        }
    }
}
