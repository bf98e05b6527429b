//! Hook flavours built on top of [`Command`]
//!
//! - `analyze`: run the tool once against every argument and report what it said
//! - `format`: run the tool per file and fail when its output differs from the file

use crate::command::{Command, ExecutionResult};
use crate::error::CommandError;
use serde::{Deserialize, Serialize};

mod formatter;

pub use formatter::{compare_to_formatted, unified_diff};

/// How a hook interprets its tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HookMode {
    /// Static analysis: the exit code is the verdict
    #[default]
    Analyze,
    /// Formatter: the tool's output is compared to each file
    Format,
}

/// A configured tool plus the way its results are judged
#[derive(Debug, Clone)]
pub struct Hook {
    pub command: Command,
    pub mode: HookMode,
    /// The formatter rewrites files instead of printing formatted text
    pub edit_in_place: bool,
}

impl Hook {
    pub fn new(command: Command, mode: HookMode) -> Self {
        Self {
            command,
            mode,
            edit_in_place: false,
        }
    }

    pub fn edit_in_place(mut self, edit_in_place: bool) -> Self {
        self.edit_in_place = edit_in_place;
        self
    }

    /// Run the hook against `user_args` (flags and file paths)
    pub fn run(&self, user_args: &[String]) -> Result<ExecutionResult, CommandError> {
        tracing::debug!(
            "Running {} hook for {} with {} argument(s)",
            match self.mode {
                HookMode::Analyze => "analyze",
                HookMode::Format => "format",
            },
            self.command.name(),
            user_args.len()
        );

        match self.mode {
            HookMode::Analyze => self.command.execute(user_args),
            HookMode::Format => compare_to_formatted(&self.command, user_args, self.edit_in_place),
        }
    }
}
