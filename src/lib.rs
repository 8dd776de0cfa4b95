//! Audio Splitter
//!
//! Partitions one long audio recording into an ordered sequence of shorter,
//! overlapping segments suitable for a downstream speech-to-text service
//! that enforces a duration or timeout limit.
//!
//! The engine never decodes audio itself: it probes the source duration via
//! ffprobe, computes a deterministic segment plan in whole seconds, and
//! drives one ffmpeg invocation per segment, validating each outcome. The
//! public contract is pure data in, structured result out; presentation is
//! left to the caller.

// Core modules
pub mod core;

// Re-exports
pub use crate::core::config::SplitConfig;
pub use crate::core::models::{
    AudioAsset, CoreError, CoreResult, ExtractionOutcome, ExtractionResult, SegmentPlan,
    SegmentSpec, SplitOutcome,
};
pub use crate::core::orchestrator::{CancelToken, SplitOrchestrator, SplitProgress};
