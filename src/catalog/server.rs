use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use crate::catalog::controller::{find_resource_by_id, loan_resource, register_resource, return_resource, search_by_title};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

pub(crate) fn build_state(dev_mode: bool) -> AppState {
    let (config, via) = if dev_mode {
        (Configuration::new("dev"), GatewayPublisherVia::Memory)
    } else {
        (Configuration::new("prod"), GatewayPublisherVia::Logs)
    };
    let catalog: Arc<dyn CatalogService> = Arc::from(create_catalog_service(&config, via));
    AppState::new(config, catalog)
}

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/catalog",
               post(register_resource).get(search_by_title))
        .route("/catalog/:id", get(find_resource_by_id))
        .route("/catalog/:id/loan", post(loan_resource))
        .route("/catalog/:id/return", post(return_resource))
        .with_state(state)
}

/// Serves the catalog routes on port 3000 until the server stops.
pub async fn run(dev_mode: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(dev_mode);
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!(branch_id = state.config.branch_id.as_str(), %addr, "catalog listening");

    axum::Server::bind(&addr)
        .serve(build_router(state).into_make_service())
        .await?;
    Ok(())
}
