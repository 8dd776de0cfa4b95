//! Configuration management
//!
//! Handles the split configuration: default values, the overlap invariant,
//! and JSON persistence.

use crate::core::models::results::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Split configuration
///
/// Supplied by the caller before planning; immutable for the lifetime of one
/// split operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Target segment length in seconds
    pub segment_length_secs: u64,

    /// Seconds shared between the tail of one segment and the head of the
    /// next, so words falling on a cut survive independent transcription
    pub overlap_secs: u64,

    /// Output codec identifier (also the output file extension)
    pub output_format: String,

    /// Output directory; `None` means next to the input file
    pub output_dir: Option<PathBuf>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            segment_length_secs: 1800,
            overlap_secs: 30,
            output_format: "mp3".to_string(),
            output_dir: None,
        }
    }
}

impl SplitConfig {
    /// Validate the configuration invariants.
    ///
    /// An overlap equal to or larger than the segment length makes forward
    /// progress impossible (the stride would be zero or negative).
    pub fn validate(&self) -> CoreResult<()> {
        if self.segment_length_secs == 0 {
            return Err(CoreError::InvalidInput(
                "segment length must be positive".to_string(),
            ));
        }
        if self.overlap_secs >= self.segment_length_secs {
            return Err(CoreError::InvalidInput(format!(
                "overlap ({} s) must be smaller than segment length ({} s)",
                self.overlap_secs, self.segment_length_secs
            )));
        }
        if self.output_format.is_empty() {
            return Err(CoreError::InvalidInput(
                "output format must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The advance in start time between consecutive segments.
    pub fn stride_secs(&self) -> u64 {
        self.segment_length_secs - self.overlap_secs
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&contents)?;
            Ok(config)
        } else {
            // Return default if file doesn't exist
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
