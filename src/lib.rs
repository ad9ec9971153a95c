//! # Tcloud - DevOps Pipeline Status Service
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the root and health endpoints
//! - [`models`] - Response payloads
//! - [`config`] - Bind address configuration
//! - [`error`] - Startup error type
//! - [`utils`] - Constants

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::handlers::{health_check, home};

/// Creates an Axum router with the application routes.
///
/// Unmapped paths fall through to axum's default `404 Not Found`. `get` also
/// answers HEAD with `200 OK` and an empty body; any other method on a mapped
/// path gets `405 Method Not Allowed`.
pub fn app() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves [`app`] until the process exits.
pub async fn serve(config: Config) -> AppResult<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!("Server listening at http://{}", listener.local_addr()?);

    axum::serve(listener, app()).await?;
    Ok(())
}
