//! # hookshim - run command-line tools as git hooks
//!
//! Wraps linters and formatters so a pre-commit style runner can call them the
//! same way: resolve the executable, run it once with fixed arguments followed
//! by the runner's flags and files, and report a uniform [`ExecutionResult`].
//!
//! ```no_run
//! use hookshim::Command;
//!
//! let command = Command::new("clang-tidy")?.args(["--quiet"]);
//! let result = command.execute(&["src/main.c".to_string()])?;
//! if !result.success() {
//!     eprint!("{}", result.stderr);
//! }
//! # Ok::<(), hookshim::CommandError>(())
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod hooks;

pub use cli::{Cli, Output};
pub use command::{Command, ExecutionResult, NOT_FOUND_CODE, Outcome};
pub use config::{ShimConfig, ToolConfig};
pub use error::CommandError;
pub use hooks::{Hook, HookMode};

/// Result type alias for hookshim operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
