//! Split pipeline orchestration
//!
//! Drives probe → plan → extraction in plan order. Each step is a blocking
//! external-process call; extraction is strictly sequential and aborts on the
//! first failure, leaving earlier segments on disk for the operator.

use crate::core::config::SplitConfig;
use crate::core::extraction::SegmentExtractor;
use crate::core::io::runner::CommandRunner;
use crate::core::io::tools::Tools;
use crate::core::models::plan::{ExtractionOutcome, SplitOutcome};
use crate::core::models::results::{CoreError, CoreResult};
use crate::core::probe::DurationProbe;
use crate::core::planner;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Caller-issued cancellation signal, checked between extraction steps.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Progress notifications for one split operation.
///
/// Pure data; rendering is left to the caller.
#[derive(Debug, Clone)]
pub enum SplitProgress {
    /// Querying the source's total duration
    Probing,
    /// Plan computed; `segments == 0` means no split is needed
    Planned {
        total_duration_secs: u64,
        segments: usize,
    },
    /// Starting extraction of one segment
    ExtractingSegment {
        index: usize,
        total: usize,
        start_secs: u64,
        end_secs: u64,
    },
    /// One segment finished and its output file is in place
    SegmentFinished {
        index: usize,
        total: usize,
        output: PathBuf,
    },
}

pub type ProgressCallback = Arc<dyn Fn(&SplitProgress) + Send + Sync>;

/// Orchestrates one split operation end to end.
///
/// Owns the asset, config, and plan for the lifetime of one `split` call;
/// nothing is shared across operations.
pub struct SplitOrchestrator {
    tools: Tools,
    config: SplitConfig,
    cancel: CancelToken,
    progress: Option<ProgressCallback>,
}

impl SplitOrchestrator {
    pub fn new(tools: Tools, config: SplitConfig) -> Self {
        Self {
            tools,
            config,
            cancel: CancelToken::new(),
            progress: None,
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    fn report(&self, event: SplitProgress) {
        if let Some(callback) = &self.progress {
            callback(&event);
        }
    }

    /// Run the complete split operation.
    ///
    /// Extraction failures abort the run and are returned as
    /// `CoreError::Extraction` with the failing segment's index and the
    /// tool's diagnostic; segments extracted before the failure stay on
    /// disk. Cancellation between steps yields `SplitOutcome::Cancelled`
    /// with the outputs completed so far.
    pub fn split(&self, source: &Path) -> CoreResult<SplitOutcome> {
        self.config.validate()?;

        tracing::info!(source = %source.display(), "starting split");
        self.report(SplitProgress::Probing);

        let probe = DurationProbe::new(CommandRunner::new(), self.tools.ffprobe.clone());
        let asset = probe.probe(source)?;

        let plan = planner::plan(&asset, &self.config)?;
        self.report(SplitProgress::Planned {
            total_duration_secs: asset.total_duration_secs,
            segments: plan.len(),
        });

        if plan.is_empty() {
            tracing::info!(
                duration_secs = asset.total_duration_secs,
                "source fits in one segment, no split needed"
            );
            return Ok(SplitOutcome::NotNeeded);
        }

        if let Some(dir) = &self.config.output_dir {
            std::fs::create_dir_all(dir)?;
        }

        let total = plan.len();
        tracing::info!(segments = total, "extracting segments");

        let extractor = SegmentExtractor::new(CommandRunner::new(), self.tools.ffmpeg.clone());
        let mut outputs = Vec::with_capacity(total);

        for spec in &plan.segments {
            if self.cancel.is_cancelled() {
                tracing::warn!(
                    completed = outputs.len(),
                    "split cancelled, keeping finished segments"
                );
                return Ok(SplitOutcome::Cancelled(outputs));
            }

            self.report(SplitProgress::ExtractingSegment {
                index: spec.index,
                total,
                start_secs: spec.start_secs,
                end_secs: spec.end_secs(),
            });

            let result = extractor.extract(&asset.path, spec, &self.config);
            match result.outcome {
                ExtractionOutcome::Success => {
                    outputs.push(spec.output_path.clone());
                    self.report(SplitProgress::SegmentFinished {
                        index: spec.index,
                        total,
                        output: spec.output_path.clone(),
                    });
                }
                ExtractionOutcome::Failure(message) => {
                    tracing::error!(index = spec.index, %message, "segment extraction failed");
                    return Err(CoreError::Extraction {
                        index: spec.index,
                        message,
                    });
                }
            }
        }

        tracing::info!(segments = outputs.len(), "split complete");
        Ok(SplitOutcome::Completed(outputs))
    }
}
