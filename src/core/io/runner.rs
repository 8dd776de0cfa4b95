//! Command runner for external process execution

use crate::core::models::results::{CoreError, CoreResult};
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Command output
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Command runner
///
/// Every external call is blocking; stdout and stderr are captured in full so
/// failures can surface the tool's own diagnostic.
#[derive(Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a command and return its captured output
    pub fn run<S: AsRef<OsStr>>(&self, program: S, args: &[&OsStr]) -> CoreResult<CommandOutput> {
        let program = program.as_ref();
        tracing::debug!(program = %program.to_string_lossy(), "spawning external tool");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CoreError::ToolNotFound(program.to_string_lossy().to_string())
                } else {
                    CoreError::Io(e)
                }
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout() {
        let runner = CommandRunner::new();
        let out = runner
            .run("sh", &[OsStr::new("-c"), OsStr::new("printf hello")])
            .unwrap();
        assert!(out.success);
        assert_eq!(out.stdout, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_failure() {
        let runner = CommandRunner::new();
        let out = runner
            .run("sh", &[OsStr::new("-c"), OsStr::new("echo bad >&2; exit 3")])
            .unwrap();
        assert!(!out.success);
        assert!(out.stderr.contains("bad"));
    }

    #[test]
    fn test_missing_program_is_tool_not_found() {
        let runner = CommandRunner::new();
        let err = runner
            .run("definitely-not-a-real-tool-xyz", &[])
            .unwrap_err();
        assert!(matches!(err, CoreError::ToolNotFound(_)));
    }
}
