//! Source duration probing via ffprobe

use crate::core::io::runner::CommandRunner;
use crate::core::models::media::AudioAsset;
use crate::core::models::results::{CoreError, CoreResult};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Queries the media-inspection tool for the total duration of a source file.
pub struct DurationProbe {
    runner: CommandRunner,
    ffprobe: PathBuf,
}

impl DurationProbe {
    pub fn new(runner: CommandRunner, ffprobe: PathBuf) -> Self {
        Self { runner, ffprobe }
    }

    /// Probe the source and return it as an immutable asset.
    ///
    /// The raw floating-point duration is rounded to the nearest whole
    /// second; container timestamps carry sub-second jitter and planning at
    /// second granularity avoids accumulating fractional drift across many
    /// segments.
    pub fn probe(&self, path: &Path) -> CoreResult<AudioAsset> {
        if !path.exists() {
            return Err(CoreError::InvalidInput(format!(
                "input file not found: {}",
                path.display()
            )));
        }

        let output = self.runner.run(
            &self.ffprobe,
            &[
                OsStr::new("-v"),
                OsStr::new("error"),
                OsStr::new("-show_entries"),
                OsStr::new("format=duration"),
                OsStr::new("-of"),
                OsStr::new("default=noprint_wrappers=1:nokey=1"),
                path.as_os_str(),
            ],
        )?;

        if !output.success {
            return Err(CoreError::Probe(format!(
                "ffprobe failed for {}: {}",
                path.display(),
                output.stderr.trim()
            )));
        }

        let duration_secs = parse_duration(&output.stdout)?;
        tracing::debug!(path = %path.display(), duration_secs, "probed source duration");

        Ok(AudioAsset::new(path.to_path_buf(), duration_secs))
    }
}

/// Parse ffprobe's stdout (a decimal number of seconds) into whole seconds.
fn parse_duration(stdout: &str) -> CoreResult<u64> {
    let raw = stdout.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| CoreError::Probe(format!("unreadable duration: {:?}", raw)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Probe(format!("invalid duration: {}", value)));
    }

    Ok(value.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("5400.012\n").unwrap(), 5400);
        assert_eq!(parse_duration("5399.6").unwrap(), 5400);
        assert_eq!(parse_duration("0.2").unwrap(), 0);
        assert_eq!(parse_duration("  1800  ").unwrap(), 1800);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("N/A").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("-5.0").is_err());
        assert!(parse_duration("nan").is_err());
        assert!(parse_duration("inf").is_err());
    }

    #[test]
    fn test_probe_missing_file() {
        let probe = DurationProbe::new(CommandRunner::new(), PathBuf::from("ffprobe"));
        let err = probe.probe(Path::new("/nonexistent/input.mp3")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_with_fake_tool() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.mp3");
        std::fs::write(&input, b"not really audio").unwrap();

        let fake = dir.path().join("fake-ffprobe");
        std::fs::write(&fake, "#!/bin/sh\necho 5400.25\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let probe = DurationProbe::new(CommandRunner::new(), fake);
        let asset = probe.probe(&input).unwrap();
        assert_eq!(asset.total_duration_secs, 5400);
        assert_eq!(asset.stem(), "input");
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_tool_failure_surfaces_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.mp3");
        std::fs::write(&input, b"x").unwrap();

        let fake = dir.path().join("fake-ffprobe");
        std::fs::write(&fake, "#!/bin/sh\necho 'moov atom not found' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let probe = DurationProbe::new(CommandRunner::new(), fake);
        let err = probe.probe(&input).unwrap_err();
        match err {
            CoreError::Probe(msg) => assert!(msg.contains("moov atom")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
