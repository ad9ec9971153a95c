//! # Home Handler
//!
//! Root endpoint reporting the deployment pipeline that produced this service.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::GreetingResponse;

/// Root endpoint describing the running pipeline.
///
/// GET /
///
/// Query parameters and headers are ignored.
#[instrument(fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn home() -> Json<GreetingResponse> {
    debug!("Root endpoint accessed");
    Json(GreetingResponse::new())
}
