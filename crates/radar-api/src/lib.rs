//! Radar API - HTTP boundary for the target-selection engine
//!
//! Validates the wire request, maps it onto the core model, runs the
//! engine and translates failures into client-facing responses.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

pub use config::{LogFormat, ServerConfig};
pub use error::ApiError;
pub use routes::router;
