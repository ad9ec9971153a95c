//! # Application Constants
//!
//! This module defines the fixed payload contents and startup defaults used
//! throughout the service.

/// Greeting returned by the root endpoint.
pub const GREETING_MESSAGE: &str = "Hello from Tcloud's DevOps Pipeline! 🚀";

/// Engineer credited in the root payload.
pub const ENGINEER: &str = "Abidemi Adewale";

/// Pipeline stack, in display order.
pub const STACK: [&str; 4] = ["Python", "Flask", "Docker", "GitHub Actions"];

/// Interface the server binds to when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the server binds to when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "tcloud=info,tower_http=info";
