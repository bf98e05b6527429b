//! Execution results shared by every wrapped tool

use std::process::{ExitStatus, Output};

/// Return code reported when the executable could not be located.
///
/// Matches the shell's "command not found" status. Use [`ExecutionResult::outcome`]
/// rather than comparing codes when a tool could legitimately exit with 127 itself.
pub const NOT_FOUND_CODE: i32 = 127;

/// Classification of a single execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The tool ran and exited non-zero
    ToolFailure(i32),
    /// The tool could not be located, nothing was spawned
    NotFound,
}

/// Captured result of one tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub return_code: i32,
    pub stdout: String,
    pub stderr: String,
    not_found: bool,
}

impl ExecutionResult {
    /// Result for a tool that ran to completion (whatever its exit code)
    pub fn completed(return_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            return_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            not_found: false,
        }
    }

    /// Synthesized result for a tool that could not be resolved
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            return_code: NOT_FOUND_CODE,
            stdout: String::new(),
            stderr: message.into(),
            not_found: true,
        }
    }

    pub(crate) fn from_output(output: &Output) -> Self {
        Self::completed(
            exit_code(output.status),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        )
    }

    pub fn outcome(&self) -> Outcome {
        if self.not_found {
            Outcome::NotFound
        } else if self.return_code == 0 {
            Outcome::Success
        } else {
            Outcome::ToolFailure(self.return_code)
        }
    }

    pub fn success(&self) -> bool {
        self.outcome() == Outcome::Success
    }

    pub fn is_not_found(&self) -> bool {
        self.not_found
    }
}

/// Numeric exit status, using the shell's `128 + signal` convention for killed processes
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
