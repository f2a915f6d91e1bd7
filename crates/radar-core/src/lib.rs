//! Radar Core - target-selection engine
//!
//! Given the points a radar sweep observed and a list of tactical protocols,
//! picks the single position to attack:
//! - Immutable target model (`Position`, `EnemyGroup`, `ScanEntry`)
//! - Closed `Protocol` enumeration mapped to filters and sort passes
//! - `RadarSystem` pipeline: engagement-range filter, protocol filters,
//!   stable sort passes in declaration order
//! - Structured error and logging facilities shared with the HTTP boundary

pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod protocol;

#[doc(hidden)]
pub use radar_core_types;

// Re-export commonly used types
pub use engine::{Directive, Filter, RadarSystem, SortPass, ENGAGEMENT_RANGE};
pub use errors::{ExError, ExErrorKind, RadarError, Result};
pub use model::{EnemyGroup, Position, ScanEntry};
pub use protocol::Protocol;
