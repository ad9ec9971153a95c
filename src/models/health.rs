use serde::Serialize;

use crate::models::ServiceStatus;

/// Payload returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
}

impl HealthResponse {
    pub const fn healthy() -> Self {
        Self {
            status: ServiceStatus::Healthy,
        }
    }
}
