//! Segment extraction from the source file using ffmpeg

use crate::core::config::SplitConfig;
use crate::core::io::runner::CommandRunner;
use crate::core::models::plan::{ExtractionOutcome, ExtractionResult, SegmentSpec};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Audio codec arguments for an output format identifier.
///
/// "mp3" keeps the lame VBR quality the original pipeline used; unknown
/// formats fall back to stream copy and rely on the container to accept it.
pub fn codec_args(format: &str) -> Vec<&'static str> {
    match format {
        "mp3" => vec!["-c:a", "libmp3lame", "-q:a", "2"],
        "wav" => vec!["-c:a", "pcm_s16le"],
        "flac" => vec!["-c:a", "flac"],
        "m4a" | "aac" => vec!["-c:a", "aac"],
        "ogg" | "opus" => vec!["-c:a", "libopus"],
        _ => vec!["-c:a", "copy"],
    }
}

/// Materializes one segment file per spec by driving the transcoding tool.
pub struct SegmentExtractor {
    runner: CommandRunner,
    ffmpeg: PathBuf,
}

impl SegmentExtractor {
    pub fn new(runner: CommandRunner, ffmpeg: PathBuf) -> Self {
        Self { runner, ffmpeg }
    }

    /// Extract a single segment.
    ///
    /// The tool is given an explicit start offset and duration (never an end
    /// timestamp, which would re-derive the duration and compound rounding
    /// error) and an overwrite flag, so re-running the same plan reproduces
    /// the same files. Success requires exit code zero AND the output file
    /// existing afterward; both failure shapes are captured in the result
    /// with the tool's diagnostic, never raised as a panic.
    pub fn extract(&self, source: &Path, spec: &SegmentSpec, config: &SplitConfig) -> ExtractionResult {
        let start = spec.start_secs.to_string();
        let duration = spec.duration_secs.to_string();

        let mut args: Vec<OsString> = vec![
            OsString::from("-hide_banner"),
            OsString::from("-i"),
            source.as_os_str().to_os_string(),
            OsString::from("-ss"),
            OsString::from(&start),
            OsString::from("-t"),
            OsString::from(&duration),
        ];
        for arg in codec_args(&config.output_format) {
            args.push(OsString::from(arg));
        }
        args.push(OsString::from("-y"));
        args.push(spec.output_path.as_os_str().to_os_string());

        let arg_refs: Vec<&OsStr> = args.iter().map(OsString::as_os_str).collect();

        tracing::debug!(
            index = spec.index,
            start = spec.start_secs,
            duration = spec.duration_secs,
            output = %spec.output_path.display(),
            "extracting segment"
        );

        let output = match self.runner.run(&self.ffmpeg, &arg_refs) {
            Ok(output) => output,
            Err(e) => {
                return ExtractionResult {
                    spec: spec.clone(),
                    outcome: ExtractionOutcome::Failure(e.to_string()),
                }
            }
        };

        let outcome = if !output.success {
            ExtractionOutcome::Failure(format!(
                "ffmpeg exited with failure: {}",
                tail(&output.stderr, 6)
            ))
        } else if !spec.output_path.exists() {
            ExtractionOutcome::Failure(format!(
                "expected output file not found: {}",
                spec.output_path.display()
            ))
        } else {
            ExtractionOutcome::Success
        };

        ExtractionResult {
            spec: spec.clone(),
            outcome,
        }
    }
}

/// Last `n` lines of a tool's stderr; ffmpeg buries the actual error there.
fn tail(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n").trim().to_string()
}
