//! Splicing embed pages into a base document.
//!
//! - [`plan`]: range arithmetic and bounds checks
//! - [`splicer`]: assembling the output document

pub mod plan;
pub mod splicer;

pub use plan::SplicePlan;
pub use splicer::{SpliceResult, SpliceStatistics, splice};
