use std::sync::Arc;
use tracing::info;

use crate::errors::service::ServiceStatusError;
use crate::errors::MonitorResult;
use crate::models::response::{MessageResponse, MetricsHistory, ServiceList};
use crate::models::service::{ServiceStatus, StatusUpdateRequest};
use crate::repositories::status_store::StatusStore;

#[derive(Debug)]
pub struct ServiceStatusUsecase<S>
where
    S: StatusStore + 'static,
{
    pub store: Arc<S>,
}

impl<S> Clone for ServiceStatusUsecase<S>
where
    S: StatusStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ServiceStatusUsecase<S>
where
    S: StatusStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list_services(&self) -> MonitorResult<ServiceList> {
        let services = self.store.list_service_status().await?;
        Ok(ServiceList { services })
    }

    /// Validates the raw request body before touching the store.
    pub async fn update_service_status(
        &self,
        service_name: &str,
        body: &[u8],
    ) -> MonitorResult<MessageResponse> {
        let status = parse_status_update(body)?;

        let rows_affected = self
            .store
            .update_service_status(service_name, status)
            .await?;

        if rows_affected == 0 {
            return Err(ServiceStatusError::ServiceNotFound {
                service_name: service_name.to_string(),
            }
            .into());
        }

        info!(%service_name, %status, rows_affected, "Service status changed");

        Ok(MessageResponse {
            message: format!(
                "Service '{}' status updated to '{}'",
                service_name, status
            ),
        })
    }

    pub async fn metrics_history(&self, container_id: &str) -> MonitorResult<MetricsHistory> {
        let metrics = self.store.metrics_history(container_id).await?;
        Ok(MetricsHistory { metrics })
    }
}

pub fn parse_status_update(body: &[u8]) -> Result<ServiceStatus, ServiceStatusError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ServiceStatusError::MissingStatus);
    }

    let request: StatusUpdateRequest =
        serde_json::from_slice(body).map_err(|e| ServiceStatusError::InvalidBody {
            reason: e.to_string(),
        })?;

    match request.status {
        None | Some(serde_json::Value::Null) => Err(ServiceStatusError::MissingStatus),
        Some(serde_json::Value::String(value)) => value
            .parse::<ServiceStatus>()
            .map_err(|value| ServiceStatusError::InvalidStatus { value }),
        Some(other) => Err(ServiceStatusError::InvalidStatus {
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MonitorError;
    use crate::repositories::status_store::MockStatusStore;

    #[test]
    fn given_each_valid_status_when_parsed_then_return_status() {
        for status in ServiceStatus::ALL {
            let body = format!(r#"{{"status":"{}"}}"#, status);

            assert_eq!(parse_status_update(body.as_bytes()).unwrap(), status);
        }
    }

    #[test]
    fn given_unknown_status_when_parsed_then_return_invalid_status() {
        let result = parse_status_update(br#"{"status":"paused"}"#);

        assert!(matches!(
            result,
            Err(ServiceStatusError::InvalidStatus { value }) if value == "paused"
        ));
    }

    #[test]
    fn given_non_string_status_when_parsed_then_return_invalid_status() {
        let result = parse_status_update(br#"{"status":3}"#);

        assert!(matches!(result, Err(ServiceStatusError::InvalidStatus { .. })));
    }

    #[test]
    fn given_missing_status_when_parsed_then_return_missing_status() {
        assert!(matches!(
            parse_status_update(br#"{"state":"down"}"#),
            Err(ServiceStatusError::MissingStatus)
        ));
        assert!(matches!(
            parse_status_update(b""),
            Err(ServiceStatusError::MissingStatus)
        ));
    }

    #[test]
    fn given_malformed_json_when_parsed_then_return_invalid_body() {
        let result = parse_status_update(b"{status: down");

        assert!(matches!(result, Err(ServiceStatusError::InvalidBody { .. })));
    }

    #[tokio::test]
    async fn given_invalid_status_when_updating_then_store_is_not_called() {
        let mut store = MockStatusStore::new();
        store.expect_update_service_status().never();
        let usecase = ServiceStatusUsecase::new(Arc::new(store));

        let result = usecase
            .update_service_status("web", br#"{"status":"sleeping"}"#)
            .await;

        assert!(matches!(
            result,
            Err(MonitorError::Service(ServiceStatusError::InvalidStatus { .. }))
        ));
    }

    #[tokio::test]
    async fn given_no_matching_row_when_updating_then_return_service_not_found() {
        let mut store = MockStatusStore::new();
        store
            .expect_update_service_status()
            .withf(|name, status| name == "ghost" && *status == ServiceStatus::Down)
            .times(1)
            .returning(|_, _| Ok(0));
        let usecase = ServiceStatusUsecase::new(Arc::new(store));

        let result = usecase
            .update_service_status("ghost", br#"{"status":"down"}"#)
            .await;

        assert!(matches!(
            result,
            Err(MonitorError::Service(ServiceStatusError::ServiceNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn given_matching_row_when_updating_then_message_names_service_and_status() {
        let mut store = MockStatusStore::new();
        store
            .expect_update_service_status()
            .times(1)
            .returning(|_, _| Ok(1));
        let usecase = ServiceStatusUsecase::new(Arc::new(store));

        let response = usecase
            .update_service_status("web", br#"{"status":"down"}"#)
            .await
            .unwrap();

        assert_eq!(response.message, "Service 'web' status updated to 'down'");
    }

    #[tokio::test]
    async fn given_no_samples_when_reading_history_then_return_empty_metrics() {
        let mut store = MockStatusStore::new();
        store
            .expect_metrics_history()
            .withf(|id| id == "a1")
            .times(1)
            .returning(|_| Ok(vec![]));
        let usecase = ServiceStatusUsecase::new(Arc::new(store));

        let history = usecase.metrics_history("a1").await.unwrap();

        assert!(history.metrics.is_empty());
    }
}
