//! Audio Splitter binary entry point

use audio_splitter::core::config::SplitConfig;
use audio_splitter::core::io::tools::Tools;
use audio_splitter::core::models::results::CoreError;
use audio_splitter::core::models::SplitOutcome;
use audio_splitter::core::orchestrator::{
    CancelToken, ProgressCallback, SplitOrchestrator, SplitProgress,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Split a long recording into overlapping segments for transcription.
#[derive(Debug, Parser)]
#[command(name = "audio-splitter", version)]
struct Args {
    /// Input audio/video file
    input: PathBuf,

    /// Segment length in seconds
    #[arg(long)]
    segment_length: Option<u64>,

    /// Overlap between consecutive segments in seconds
    #[arg(long)]
    overlap: Option<u64>,

    /// Output format (mp3, wav, flac, m4a, ogg, ...)
    #[arg(long)]
    format: Option<String>,

    /// Output directory (default: next to the input file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON configuration file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Exit codes for scripting integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliExit {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    MissingDependency = 3,
    ProbeFailed = 4,
    ExtractionFailed = 5,
    Cancelled = 6,
}

impl From<CliExit> for ExitCode {
    fn from(code: CliExit) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audio_splitter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Ctrl-C flips the cancel token; the orchestrator notices it between
    // extraction steps and keeps the segments finished so far.
    let cancel = CancelToken::new();
    {
        let token = cancel.clone();
        if let Err(err) = ctrlc::set_handler(move || token.cancel()) {
            tracing::warn!(%err, "could not install Ctrl-C handler");
        }
    }

    match run(args, cancel) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            CliExit::GeneralError.into()
        }
    }
}

fn run(args: Args, cancel: CancelToken) -> anyhow::Result<CliExit> {
    let mut config = match &args.config {
        Some(path) => match SplitConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: invalid config file {}: {}", path.display(), err);
                return Ok(CliExit::InvalidArguments);
            }
        },
        None => SplitConfig::default(),
    };

    if let Some(length) = args.segment_length {
        config.segment_length_secs = length;
    }
    if let Some(overlap) = args.overlap {
        config.overlap_secs = overlap;
    }
    if let Some(format) = args.format {
        config.output_format = format;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }

    if let Err(err) = config.validate() {
        eprintln!("Error: {err}");
        return Ok(CliExit::InvalidArguments);
    }

    let tools = match Tools::locate() {
        Ok(tools) => tools,
        Err(err) => {
            eprintln!("Error: {err}. Please install FFmpeg.");
            return Ok(CliExit::MissingDependency);
        }
    };

    let mut orchestrator = SplitOrchestrator::new(tools, config).with_cancel_token(cancel);
    if !args.quiet {
        orchestrator = orchestrator.with_progress_callback(progress_printer());
    }

    match orchestrator.split(&args.input) {
        Ok(SplitOutcome::NotNeeded) => {
            println!("File is shorter than the segment length. No splitting needed.");
            Ok(CliExit::Success)
        }
        Ok(SplitOutcome::Completed(outputs)) => {
            println!("\nCreated {} segments:", outputs.len());
            for path in &outputs {
                println!("  - {}", path.display());
            }
            Ok(CliExit::Success)
        }
        Ok(SplitOutcome::Cancelled(outputs)) => {
            println!(
                "\nCancelled after {} completed segment(s); finished files were kept.",
                outputs.len()
            );
            Ok(CliExit::Cancelled)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(match err {
                CoreError::ToolNotFound(_) => CliExit::MissingDependency,
                CoreError::InvalidInput(_) => CliExit::InvalidArguments,
                CoreError::Probe(_) => CliExit::ProbeFailed,
                CoreError::Extraction { .. } => CliExit::ExtractionFailed,
                _ => CliExit::GeneralError,
            })
        }
    }
}

/// Render progress events the way the operator expects: minutes, one line
/// per step.
fn progress_printer() -> ProgressCallback {
    Arc::new(|event: &SplitProgress| match event {
        SplitProgress::Probing => println!("[*] Getting audio duration..."),
        SplitProgress::Planned {
            total_duration_secs,
            segments,
        } => {
            println!(
                "[*] Duration: {:.1} minutes",
                *total_duration_secs as f64 / 60.0
            );
            if *segments > 0 {
                println!("[*] Creating {segments} segments...");
            }
        }
        SplitProgress::ExtractingSegment {
            index,
            total,
            start_secs,
            end_secs,
        } => println!(
            "[*] Creating segment {index}/{total}: {:.1}min - {:.1}min",
            *start_secs as f64 / 60.0,
            *end_secs as f64 / 60.0
        ),
        SplitProgress::SegmentFinished { index, total, .. } => {
            println!("[*] Segment {index}/{total} done")
        }
    })
}
