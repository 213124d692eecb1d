pub mod codes;
pub mod probe;
pub mod request;
pub mod runtime;
pub mod service;
pub mod store;

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::probe::ProbeError;
use crate::errors::request::RequestError;
use crate::errors::runtime::RuntimeError;
use crate::errors::service::ServiceStatusError;
use crate::errors::store::StoreError;

pub type MonitorResult<T> = Result<T, MonitorError>;

pub trait HasErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Service(#[from] ServiceStatusError),

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl MonitorError {
    /// Diagnostic text carried alongside the headline, if the failure has any.
    pub fn details(&self) -> Option<String> {
        match self {
            MonitorError::Config(_) => None,
            MonitorError::Runtime(e) => e.details(),
            MonitorError::Store(e) => e.details(),
            MonitorError::Service(e) => e.details(),
            MonitorError::Probe(e) => e.details(),
            MonitorError::Request(e) => e.details(),
            MonitorError::Internal(e) => Some(format!("{:#}", e)),
        }
    }
}

impl HasErrorCode for MonitorError {
    fn error_code(&self) -> &'static str {
        match self {
            MonitorError::Config(e) => e.error_code(),
            MonitorError::Runtime(e) => e.error_code(),
            MonitorError::Store(e) => e.error_code(),
            MonitorError::Service(e) => e.error_code(),
            MonitorError::Probe(e) => e.error_code(),
            MonitorError::Request(e) => e.error_code(),
            MonitorError::Internal(_) => codes::ErrorCode::INTERNAL,
        }
    }
}
