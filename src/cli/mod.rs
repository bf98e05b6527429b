//! Command-line interface for hookshim
//!
//! The binary is what a pre-commit style runner calls: the tool name comes
//! first, then whatever flags and file names the runner appends. The process
//! exits with the tool's own exit code.

use crate::config::{ShimConfigLoader, ToolConfig};
use crate::error::CommandError;
use crate::hooks::HookMode;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod output;

pub use output::Output;

/// Run a linter or formatter as a git hook and report its result
#[derive(Parser, Debug)]
#[command(name = "hookshim", version, about, long_about = None)]
pub struct Cli {
    /// Fixed argument placed before the trailing arguments (repeatable, use --arg=-x for flags)
    #[arg(short = 'a', long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub fixed_args: Vec<String>,

    /// Look for the tool in this directory instead of on PATH
    #[arg(long, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Run the tool file through this program (e.g. python)
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Documentation link shown when the tool is missing
    #[arg(long, value_name = "URL")]
    pub help_url: Option<String>,

    /// Require the tool's --version output to start with this version
    #[arg(long, value_name = "VERSION")]
    pub tool_version: Option<String>,

    /// Text preceding the version number in --version output
    #[arg(long, value_name = "TEXT")]
    pub look_behind: Option<String>,

    /// How the tool's result is judged
    #[arg(long, value_enum)]
    pub mode: Option<HookMode>,

    /// The formatter rewrites files instead of printing them
    #[arg(long)]
    pub edit_in_place: bool,

    /// Only check whether the tool is installed
    #[arg(long)]
    pub check: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "HOOKSHIM_CONFIG")]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Tool to run, followed by its arguments and files
    #[arg(
        value_name = "TOOL [ARGS]...",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Run the hook and return the exit code for this process
    pub fn run(self) -> Result<i32> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let (tool, user_args) = self
            .command
            .split_first()
            .context("No tool given")?;

        let loader = ShimConfigLoader::with_custom_config(self.config.as_deref());
        let tool_config = self.apply_overrides(loader.load()?.tool(tool));
        tracing::debug!("Settings for {}: {:?}", tool, tool_config);

        let hook = tool_config.build_hook(tool, user_args)?;

        if self.check {
            return Ok(match hook.command.resolve() {
                Some(path) if hook.command.check_installed() => {
                    output.success(&format!("{} found at {}", tool, path.display()));
                    0
                }
                _ => {
                    eprint!("{}", hook.command.not_found_message());
                    crate::command::NOT_FOUND_CODE
                }
            });
        }

        if let Some(expected) = &tool_config.version {
            if hook.command.check_installed() {
                let look_behind = tool_config.look_behind.as_deref().unwrap_or("");
                match hook.command.check_version(look_behind, expected) {
                    Ok(()) => output.verbose(&format!("{} version matches {}", tool, expected)),
                    Err(
                        err @ (CommandError::VersionMismatch { .. }
                        | CommandError::VersionFormat { .. }),
                    ) => {
                        output.problem(tool, "version check failed", &err.to_string());
                        return Ok(1);
                    }
                    // Vanished since the check; the run below reports it
                    Err(CommandError::NotFound { .. }) => {}
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let result = hook
            .run(user_args)
            .with_context(|| format!("Failed to run {}", tool))?;

        output.passthrough(&result)?;
        if result.is_not_found() {
            output.verbose(&format!("{} is not installed", tool));
        }
        Ok(result.return_code)
    }

    /// Command-line flags win over configured settings
    fn apply_overrides(&self, mut tool: ToolConfig) -> ToolConfig {
        tool.args.extend(self.fixed_args.iter().cloned());
        if let Some(dir) = &self.install_dir {
            tool.install_dir = Some(dir.clone());
        }
        if let Some(interpreter) = &self.interpreter {
            tool.interpreter = Some(interpreter.clone());
        }
        if let Some(url) = &self.help_url {
            tool.help_url = Some(url.clone());
        }
        if let Some(version) = &self.tool_version {
            tool.version = Some(version.clone());
        }
        if let Some(look_behind) = &self.look_behind {
            tool.look_behind = Some(look_behind.clone());
        }
        if let Some(mode) = self.mode {
            tool.mode = mode;
        }
        if self.edit_in_place {
            tool.edit_in_place = true;
        }
        tool
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout belongs to the tool
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
