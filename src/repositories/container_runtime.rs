use async_trait::async_trait;
use mockall::automock;

use crate::errors::runtime::RuntimeError;
use crate::models::container::{ContainerDetail, ContainerStatsRow, ContainerSummary};

/// Read-only view of the container runtime.
#[automock]
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// All containers, running and stopped. Records the runtime emits in an
    /// unexpected shape are skipped.
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, RuntimeError>;

    async fn inspect_container(&self, id: &str) -> Result<ContainerDetail, RuntimeError>;

    /// A single non-streaming stats sample.
    async fn container_stats(&self, id: &str) -> Result<ContainerStatsRow, RuntimeError>;
}
