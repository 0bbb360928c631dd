#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod product_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use inv_core::ports::DatasetStore;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct a full API router over the given dataset store.
///
/// The OpenAPI document assembled while building the router is returned
/// alongside it, so callers can export the schema without starting a
/// server. CORS is left permissive: the browser UI that consumes this API
/// is served from a different origin during development.
pub fn router<T: ApiStore>(store: T) -> (axum::Router, Arc<OpenApi>) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/products", product_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    // Arc, or every request clones the whole document
    let api = Arc::new(api);
    let router = router
        .layer(Extension(api.clone()))
        .layer(CorsLayer::permissive())
        .with_state(store);

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiStore>(
    config: AxumConfig,
    store: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(store);
    axum::serve(listener, service).await
}

/// Axum imposes a pile of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, spells them out once: any
/// clonable, shareable [`DatasetStore`] can back the API.
pub trait ApiStore: Clone + Send + Sync + 'static + DatasetStore {}

// this is the blanket implementation
impl<T> ApiStore for T where T: Clone + Send + Sync + 'static + DatasetStore {}
