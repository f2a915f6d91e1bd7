//! Target-selection engine
//!
//! A protocol list compiles into a filter chain (always headed by the
//! engagement-range filter) and an ordered list of stable sort passes.

pub mod filter;
pub mod radar;
pub mod sort;

pub use filter::{Filter, ENGAGEMENT_RANGE};
pub use radar::RadarSystem;
pub use sort::SortPass;

/// What a single protocol contributes to the pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    Filter(Filter),
    Sort(SortPass),
}
