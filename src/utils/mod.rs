//! # Utility Modules
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Payload contents and startup defaults

pub mod constant;
