//! # Service Status
//!
//! Status values reported by the service endpoints.

use serde::Serialize;

/// Represents the status value carried in a response payload.
///
/// - `Running` - Reported by the root endpoint while the service is up
/// - `Healthy` - Reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Running,
    Healthy,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str = match self {
            ServiceStatus::Running => "running",
            ServiceStatus::Healthy => "healthy",
        };
        write!(f, "{status_str}")
    }
}
