//! API Server Module
//!
//! This module implements the HTTP server exposing the subnet registry.
//! Four GET endpoints are served: a liveness check, the raw subnet records,
//! the derived tracking configuration, and the base64-encoded form of that
//! configuration. Every data endpoint re-queries the store per request; there
//! is no caching and no retry, a backend failure surfaces as a 500 response.

use crate::{Subnet, TrackingConfig, config::Config, registry::Registry, tracking};
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use tracing::{error, info};

/// Shared application state accessible across all request handlers
///
/// Holds the registry handle; clones share one connection pool, which
/// provides all synchronization between concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub(crate) registry: Registry,
}

/// The main API server struct
///
/// Encapsulates the server configuration and application state.
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Creates a new API server instance
    ///
    /// # Arguments
    /// * `config` - Server configuration (host, port)
    /// * `registry` - The opened subnet record registry
    pub fn new(config: Config, registry: Registry) -> Self {
        let state = AppState { registry };

        Self { config, state }
    }

    /// Starts the API server and begins listening for incoming requests
    ///
    /// Binds the router to the configured host and port and serves requests
    /// until the process is terminated.
    ///
    /// # Returns
    /// `Ok(())` if the server starts successfully, or an error if binding fails
    pub async fn start(self) -> anyhow::Result<()> {
        let app = router(self.state);

        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        info!("API server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the application router
///
/// Standalone so tests can drive the routes without binding a socket.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/subnets", get(list_subnets))
        .route("/config", get(tracking_config))
        .route("/encoded", get(encoded_config))
        .with_state(state)
}

/// Liveness endpoint
async fn root() -> &'static str {
    "Hello, World!"
}

/// Returns every registered subnet as a JSON array
///
/// An empty store yields an empty array, not an error.
async fn list_subnets(
    State(state): State<AppState>,
) -> Result<Json<Vec<Subnet>>, (StatusCode, String)> {
    let subnets = fetch_subnets(&state).await?;

    Ok(Json(subnets))
}

/// Returns the derived tracking configuration as JSON
async fn tracking_config(
    State(state): State<AppState>,
) -> Result<Json<TrackingConfig>, (StatusCode, String)> {
    let subnets = fetch_subnets(&state).await?;

    Ok(Json(tracking::generate(&subnets)))
}

/// Returns the tracking configuration as base64-encoded JSON
async fn encoded_config(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
    let subnets = fetch_subnets(&state).await?;

    let config = tracking::generate(&subnets);

    tracking::json_to_base64(&config).map_err(|e| {
        error!("Failed to encode config: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode config: {}", e),
        )
    })
}

/// Query all subnets, mapping store failures to a plain-text 500 response
async fn fetch_subnets(state: &AppState) -> Result<Vec<Subnet>, (StatusCode, String)> {
    state.registry.find_all().await.map_err(|e| {
        error!("Failed to fetch subnets: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to fetch subnets: {}", e),
        )
    })
}
