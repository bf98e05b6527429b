//! Error types for command execution
//!
//! Only conditions that a hook cannot express as an [`ExecutionResult`](crate::command::ExecutionResult)
//! end up here. A missing tool or a tool that exits non-zero is a normal result, not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("command name must not be empty")]
    EmptyName,

    /// The host refused to start a program that resolution said was there.
    #[error("failed to spawn {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name} not found")]
    NotFound { name: String },

    #[error("The version format for {command} has changed.")]
    VersionFormat { command: String, output: String },

    #[error(
        "Version of {command} is wrong. Expected version: {expected} Found version: {actual}. \
         Edit your pre-commit config or use a different version of {command}."
    )]
    VersionMismatch {
        command: String,
        expected: String,
        actual: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
