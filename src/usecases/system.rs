use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

use crate::errors::MonitorResult;
use crate::models::metrics::SystemStats;
use crate::models::response::{HealthStatus, ReadinessStatus};
use crate::repositories::resource_probe::ResourceProbe;
use crate::repositories::status_store::StatusStore;

#[derive(Debug)]
pub struct SystemUsecase<S, P>
where
    S: StatusStore + 'static,
    P: ResourceProbe + 'static,
{
    pub store: Arc<S>,
    pub probe: Arc<P>,
}

impl<S, P> Clone for SystemUsecase<S, P>
where
    S: StatusStore + 'static,
    P: ResourceProbe + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            probe: Arc::clone(&self.probe),
        }
    }
}

impl<S, P> SystemUsecase<S, P>
where
    S: StatusStore + 'static,
    P: ResourceProbe + 'static,
{
    pub fn new(store: Arc<S>, probe: Arc<P>) -> Self {
        Self { store, probe }
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok",
            timestamp: Utc::now(),
        }
    }

    pub async fn readiness(&self) -> ReadinessStatus {
        match self.store.ping().await {
            Ok(()) => ReadinessStatus::ready(),
            Err(e) => {
                let error = match e.details() {
                    Some(details) => format!("{}: {}", e, details),
                    None => e.to_string(),
                };
                warn!(%error, "Readiness check failed");
                ReadinessStatus::not_ready(error)
            }
        }
    }

    pub async fn system_stats(&self) -> MonitorResult<SystemStats> {
        Ok(self.probe.sample().await?)
    }
}
