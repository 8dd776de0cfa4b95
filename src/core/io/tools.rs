//! External tool discovery
//!
//! Both required tools are resolved up front so a missing dependency is
//! reported before any work starts.

use crate::core::models::results::{CoreError, CoreResult};
use std::env;
use std::path::PathBuf;

/// Resolved paths to the external tools the engine drives.
#[derive(Debug, Clone)]
pub struct Tools {
    /// Media-inspection tool (duration probe)
    pub ffprobe: PathBuf,
    /// Transcoding tool (segment extraction)
    pub ffmpeg: PathBuf,
}

impl Tools {
    /// Locate both tools on PATH, failing fast on the first one missing.
    pub fn locate() -> CoreResult<Self> {
        Ok(Self {
            ffprobe: require("ffprobe")?,
            ffmpeg: require("ffmpeg")?,
        })
    }
}

fn require(tool: &str) -> CoreResult<PathBuf> {
    find_in_path(tool).ok_or_else(|| CoreError::ToolNotFound(tool.to_string()))
}

fn find_in_path(tool: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        let full = dir.join(tool);
        if full.is_file() {
            return Some(full);
        }
        #[cfg(windows)]
        {
            let exe = dir.join(format!("{tool}.exe"));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}
