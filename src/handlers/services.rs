use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::errors::MonitorResult;
use crate::handlers::extract::PathParam;
use crate::models::response::{MessageResponse, MetricsHistory, ServiceList};
use crate::repositories::status_store::StatusStore;
use crate::usecases::service_status::ServiceStatusUsecase;

pub async fn get_services_status<S>(
    State(usecase): State<ServiceStatusUsecase<S>>,
) -> MonitorResult<Json<ServiceList>>
where
    S: StatusStore + 'static,
{
    Ok(Json(usecase.list_services().await?))
}

// The body is taken raw so malformed JSON still gets a JSON error response.
pub async fn update_service_status<S>(
    State(usecase): State<ServiceStatusUsecase<S>>,
    PathParam(service_name): PathParam,
    body: Bytes,
) -> MonitorResult<Json<MessageResponse>>
where
    S: StatusStore + 'static,
{
    Ok(Json(
        usecase.update_service_status(&service_name, &body).await?,
    ))
}

pub async fn get_metrics_history<S>(
    State(usecase): State<ServiceStatusUsecase<S>>,
    PathParam(container_id): PathParam,
) -> MonitorResult<Json<MetricsHistory>>
where
    S: StatusStore + 'static,
{
    Ok(Json(usecase.metrics_history(&container_id).await?))
}
