use async_trait::async_trait;
use mockall::automock;

use crate::errors::probe::ProbeError;
use crate::models::metrics::SystemStats;

#[automock]
#[async_trait]
pub trait ResourceProbe: Send + Sync {
    /// Blocks for the CPU sampling window before returning.
    async fn sample(&self) -> Result<SystemStats, ProbeError>;
}
