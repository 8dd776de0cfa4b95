//! Segment plan data structures

use super::media::AudioAsset;
use crate::core::config::SplitConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One planned cut of the source recording.
///
/// Produced only by the planner, as an ordered sequence, and never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSpec {
    /// 1-based ordinal within the plan
    pub index: usize,

    /// Start offset into the source, in seconds
    pub start_secs: u64,

    /// Length of this segment, in seconds
    pub duration_secs: u64,

    /// Where the extracted segment file is written
    pub output_path: PathBuf,
}

impl SegmentSpec {
    /// End offset of this segment (start + duration).
    pub fn end_secs(&self) -> u64 {
        self.start_secs + self.duration_secs
    }

    /// Derive the output filename for a segment: `<stem>_part<NN>.<format>`,
    /// `NN` zero-padded to at least two digits, starting at 01.
    pub fn output_filename(stem: &str, index: usize, format: &str) -> String {
        format!("{}_part{:02}.{}", stem, index, format)
    }
}

/// The full ordered set of segments computed for one source and config.
#[derive(Debug, Clone)]
pub struct SegmentPlan {
    pub asset: AudioAsset,
    pub config: SplitConfig,
    pub segments: Vec<SegmentSpec>,
}

impl SegmentPlan {
    /// True when the source fits within one segment and no split is needed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

/// Outcome of one segment extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// The tool exited zero and the output file exists
    Success,
    /// Non-zero exit or missing output, with the tool's diagnostic
    Failure(String),
}

/// Result of extracting one segment, created once per spec and never mutated.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub spec: SegmentSpec,
    pub outcome: ExtractionOutcome,
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ExtractionOutcome::Success)
    }
}

/// Terminal result of a split operation.
///
/// Fatal failures (missing tool, unreadable duration, a segment's transcode
/// failing) are reported as `Err(CoreError)` by the orchestrator instead of
/// an outcome arm, carrying the failing segment index where applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// Source fits in one segment; nothing was written
    NotNeeded,
    /// Every planned segment was extracted, in plan order
    Completed(Vec<PathBuf>),
    /// Cancelled between extraction steps; completed outputs are kept
    Cancelled(Vec<PathBuf>),
}
