use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::container::ContainerSummary;
use crate::models::metrics::ContainerMetricSample;
use crate::models::service::ServiceStatusRecord;

#[derive(Debug, Clone, Serialize)]
pub struct ContainerList {
    pub containers: Vec<ContainerSummary>,
    pub count: usize,
}

impl From<Vec<ContainerSummary>> for ContainerList {
    fn from(containers: Vec<ContainerSummary>) -> Self {
        let count = containers.len();
        ContainerList { containers, count }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceList {
    pub services: Vec<ServiceStatusRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsHistory {
    pub metrics: Vec<ContainerMetricSample>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReadinessStatus {
    pub fn ready() -> Self {
        ReadinessStatus {
            status: "ready",
            timestamp: Some(Utc::now()),
            error: None,
        }
    }

    pub fn not_ready(error: String) -> Self {
        ReadinessStatus {
            status: "not_ready",
            timestamp: None,
            error: Some(error),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.error.is_none()
    }
}
