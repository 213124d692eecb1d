use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::errors::MonitorResult;
use crate::models::metrics::SystemStats;
use crate::models::response::{HealthStatus, ReadinessStatus};
use crate::repositories::resource_probe::ResourceProbe;
use crate::repositories::status_store::StatusStore;
use crate::usecases::system::SystemUsecase;

pub async fn health_check<S, P>(State(usecase): State<SystemUsecase<S, P>>) -> Json<HealthStatus>
where
    S: StatusStore + 'static,
    P: ResourceProbe + 'static,
{
    Json(usecase.health())
}

pub async fn readiness_check<S, P>(
    State(usecase): State<SystemUsecase<S, P>>,
) -> (StatusCode, Json<ReadinessStatus>)
where
    S: StatusStore + 'static,
    P: ResourceProbe + 'static,
{
    let readiness = usecase.readiness().await;
    let status = if readiness.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(readiness))
}

pub async fn get_system_stats<S, P>(
    State(usecase): State<SystemUsecase<S, P>>,
) -> MonitorResult<Json<SystemStats>>
where
    S: StatusStore + 'static,
    P: ResourceProbe + 'static,
{
    Ok(Json(usecase.system_stats().await?))
}
