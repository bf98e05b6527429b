//! Output for the hook entry point
//!
//! Tool output is written through untouched so the hook runner shows exactly what
//! the tool printed. Messages from the shim itself use the styled helpers.

use crate::command::{ExecutionResult, problem_line};
use console::style;
use std::io::{self, Write};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Write the captured streams to our own stdout and stderr, verbatim
    pub fn passthrough(&self, result: &ExecutionResult) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(result.stdout.as_bytes())?;
        stdout.flush()?;

        let mut stderr = io::stderr().lock();
        stderr.write_all(result.stderr.as_bytes())?;
        stderr.flush()
    }

    /// Report a problem the shim detected on the tool's behalf. Always shown.
    pub fn problem(&self, command: &str, problem: &str, details: &str) {
        eprintln!("{}", style(problem_line(command, problem)).red());
        if !details.is_empty() {
            eprintln!("{}", details);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✔").green(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }
}
