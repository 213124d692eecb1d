use axum::extract::State;
use axum::Json;

use crate::errors::MonitorResult;
use crate::handlers::extract::PathParam;
use crate::models::container::{ContainerDetail, ContainerStatsRow};
use crate::models::response::ContainerList;
use crate::repositories::container_runtime::ContainerRuntime;
use crate::usecases::container::ContainerUsecase;

pub async fn list_containers<R>(
    State(usecase): State<ContainerUsecase<R>>,
) -> MonitorResult<Json<ContainerList>>
where
    R: ContainerRuntime + 'static,
{
    Ok(Json(usecase.list_containers().await?))
}

pub async fn get_container<R>(
    State(usecase): State<ContainerUsecase<R>>,
    PathParam(id): PathParam,
) -> MonitorResult<Json<ContainerDetail>>
where
    R: ContainerRuntime + 'static,
{
    Ok(Json(usecase.inspect_container(&id).await?))
}

pub async fn get_container_stats<R>(
    State(usecase): State<ContainerUsecase<R>>,
    PathParam(id): PathParam,
) -> MonitorResult<Json<ContainerStatsRow>>
where
    R: ContainerRuntime + 'static,
{
    Ok(Json(usecase.container_stats(&id).await?))
}
