//! # Health Check Handler
//!
//! Health endpoint for load balancers, container orchestrators and the
//! deployment pipeline to verify that the service is up.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::HealthResponse;

/// Health check endpoint.
///
/// GET /health
///
/// Performs no dependency checks; answering at all means the service is healthy.
///
/// # Returns
///
/// Always `200 OK` with `{"status":"healthy"}`.
#[instrument(fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");
    Json(HealthResponse::healthy())
}
