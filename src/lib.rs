pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod telemetry;
pub mod usecases;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::handlers::containers::{get_container, get_container_stats, list_containers};
use crate::handlers::error::{method_not_allowed, route_not_found};
use crate::handlers::services::{get_metrics_history, get_services_status, update_service_status};
use crate::handlers::system::{get_system_stats, health_check, readiness_check};
use crate::repositories::container_runtime::ContainerRuntime;
use crate::repositories::docker_cli::DockerCli;
use crate::repositories::mysql_store::MySqlStore;
use crate::repositories::resource_probe::ResourceProbe;
use crate::repositories::status_store::StatusStore;
use crate::repositories::sysinfo_probe::SysinfoProbe;
use crate::telemetry::initialize_telemetry_with_configuration;
use crate::usecases::container::ContainerUsecase;
use crate::usecases::service_status::ServiceStatusUsecase;
use crate::usecases::system::SystemUsecase;

pub async fn start() -> Result<()> {
    let config = Config::load().context("Loading configuration")?;
    let telemetry = initialize_telemetry_with_configuration(&config.telemetry)?;

    info!(
        database = ?config.database,
        runtime = ?config.runtime,
        probe = ?config.probe,
        "Configuration loaded"
    );

    let runtime = Arc::new(DockerCli::from_config(&config.runtime));
    let store = Arc::new(MySqlStore::new(&config.database));
    let probe = Arc::new(SysinfoProbe::new(&config.probe));

    let app = build_router(runtime, store, probe);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Binding {}", address))?;
    info!(%address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Serving HTTP")?;

    info!("Shut down");
    telemetry.shutdown();

    Ok(())
}

/// Wires every endpoint to its usecase. Each adapter is injected so tests can
/// substitute fakes.
pub fn build_router<R, S, P>(runtime: Arc<R>, store: Arc<S>, probe: Arc<P>) -> Router
where
    R: ContainerRuntime + 'static,
    S: StatusStore + 'static,
    P: ResourceProbe + 'static,
{
    let system_usecase = SystemUsecase::new(Arc::clone(&store), probe);
    let container_usecase = ContainerUsecase::new(runtime);
    let service_usecase = ServiceStatusUsecase::new(store);

    let system_routes = Router::new()
        .route("/health", get(health_check::<S, P>))
        .route("/ready", get(readiness_check::<S, P>))
        .route("/system/stats", get(get_system_stats::<S, P>))
        .with_state(system_usecase);

    let container_routes = Router::new()
        .route("/containers", get(list_containers::<R>))
        .route("/containers/{id}", get(get_container::<R>))
        .route("/containers/{id}/stats", get(get_container_stats::<R>))
        .with_state(container_usecase);

    let service_routes = Router::new()
        .route("/services/status", get(get_services_status::<S>))
        .route("/services/{name}/status", post(update_service_status::<S>))
        .route("/metrics/history/{id}", get(get_metrics_history::<S>))
        .with_state(service_usecase);

    Router::new()
        .merge(system_routes)
        .merge(container_routes)
        .merge(service_routes)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
