//! Core types shared across the radar crates
//!
//! This crate provides foundational types used by the error and logging
//! facilities as well as the HTTP boundary:
//!
//! - **Correlation types**: RequestId, TraceId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
