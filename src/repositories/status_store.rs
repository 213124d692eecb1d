use async_trait::async_trait;
use mockall::automock;

use crate::errors::store::StoreError;
use crate::models::metrics::ContainerMetricSample;
use crate::models::service::{ServiceStatus, ServiceStatusRecord};

pub const METRICS_HISTORY_LIMIT: usize = 100;

#[automock]
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Opens and closes a connection without issuing a query.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_service_status(&self) -> Result<Vec<ServiceStatusRecord>, StoreError>;

    /// Sets the status and stamps `last_updated`. Returns how many rows matched
    /// `service_name`.
    async fn update_service_status(
        &self,
        service_name: &str,
        status: ServiceStatus,
    ) -> Result<u64, StoreError>;

    /// Newest first, at most [`METRICS_HISTORY_LIMIT`] samples.
    async fn metrics_history(
        &self,
        container_id: &str,
    ) -> Result<Vec<ContainerMetricSample>, StoreError>;
}
