//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Home** (`home`) - Pipeline greeting and status
//! - **Health Check** (`health_check`) - Application health monitoring

mod health_check;
mod home;

pub use health_check::*;
pub use home::*;
