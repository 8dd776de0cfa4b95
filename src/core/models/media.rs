//! Source media descriptions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A probed source recording.
///
/// Created once by the duration probe and read-only afterward. The duration
/// is already rounded to whole seconds; all planning arithmetic downstream
/// is integer-only, so fractional container jitter cannot accumulate across
/// segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioAsset {
    /// Path to the source file
    pub path: PathBuf,

    /// Total duration in whole seconds
    pub total_duration_secs: u64,
}

impl AudioAsset {
    pub fn new(path: PathBuf, total_duration_secs: u64) -> Self {
        Self {
            path,
            total_duration_secs,
        }
    }

    /// Source filename without extension, used to derive segment names.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("audio")
    }
}
