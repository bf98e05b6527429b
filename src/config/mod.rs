//! Configuration for wrapped tools
//!
//! Per-tool defaults live in layered TOML files and `HOOKSHIM_*` environment
//! variables (see [`ShimConfigLoader`]). Command-line flags override whatever is loaded here.

use crate::command::{Command, contains_key};
use crate::error::CommandError;
use crate::hooks::{Hook, HookMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod core;

pub use self::core::ShimConfigLoader;

/// Merged configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShimConfig {
    #[serde(default)]
    pub tools: BTreeMap<String, ToolConfig>,
}

/// Settings for one tool, keyed by executable name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Fixed arguments placed before caller arguments
    pub args: Vec<String>,

    /// Arguments added only when the caller has not set the same option
    pub defaults: Vec<String>,

    pub install_dir: Option<PathBuf>,
    pub interpreter: Option<String>,
    pub help_url: Option<String>,

    /// Text printed right before the version number in `--version` output
    pub look_behind: Option<String>,

    /// Pinned version, checked before every run
    pub version: Option<String>,

    pub mode: HookMode,
    pub edit_in_place: bool,
}

impl ShimConfig {
    /// Settings for `name`, or empty settings if it is not configured
    pub fn tool(&self, name: &str) -> ToolConfig {
        self.tools.get(name).cloned().unwrap_or_default()
    }
}

impl ToolConfig {
    /// Build the hook for `name`; `user_args` decide which defaults still apply
    pub fn build_hook(&self, name: &str, user_args: &[String]) -> Result<Hook, CommandError> {
        let mut command = Command::new(name)?.args(self.args.iter().cloned());

        for default in &self.defaults {
            if contains_key(user_args, default) {
                tracing::trace!("{} already set by caller", default);
                continue;
            }
            command = command.add_if_missing(std::slice::from_ref(default));
        }

        if let Some(dir) = &self.install_dir {
            command = command.install_dir(dir);
        }
        if let Some(interpreter) = &self.interpreter {
            command = command.interpreter(interpreter);
        }
        if let Some(url) = &self.help_url {
            command = command.help_url(url);
        }

        Ok(Hook::new(command, self.mode).edit_in_place(self.edit_in_place))
    }
}
