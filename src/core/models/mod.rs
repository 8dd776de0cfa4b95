//! Core data models
//!
//! This module contains the data structures used throughout the split
//! pipeline:
//! - Source media descriptions
//! - Segment specifications and plans
//! - Extraction results and split outcomes
//! - Result and error types

pub mod media;
pub mod plan;
pub mod results;

// Re-exports for convenience
pub use media::AudioAsset;
pub use plan::{ExtractionOutcome, ExtractionResult, SegmentPlan, SegmentSpec, SplitOutcome};
pub use results::{CoreError, CoreResult};
