//! Command execution for wrapped tools
//!
//! A [`Command`] names an external executable plus the arguments that always
//! precede caller input. Executing it resolves the executable, runs it once,
//! and hands back an [`ExecutionResult`] whatever the tool did. Only a host
//! level spawn failure is returned as an error.

use crate::error::CommandError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

mod args;
mod resolve;
mod result;
mod version;

#[cfg(test)]
mod tests;

pub use args::{add_if_missing, contains_key, split_paths};
pub use resolve::resolve;
pub use result::{ExecutionResult, NOT_FOUND_CODE, Outcome};
pub use version::{assert_version, extract_version};

/// An external tool wrapped as a hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    fixed_args: Vec<String>,
    install_dir: Option<PathBuf>,
    interpreter: Option<String>,
    help_url: Option<String>,
}

impl Command {
    /// Create a command for `name`. The name is resolved at execution time, not here.
    pub fn new(name: impl Into<String>) -> Result<Self, CommandError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommandError::EmptyName);
        }
        Ok(Self {
            name,
            fixed_args: Vec::new(),
            install_dir: None,
            interpreter: None,
            help_url: None,
        })
    }

    /// Append fixed arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fixed_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append `new_args` unless their key is already among the fixed arguments
    pub fn add_if_missing(mut self, new_args: &[String]) -> Self {
        add_if_missing(&mut self.fixed_args, new_args);
        self
    }

    /// Look for the executable in `dir` instead of on the PATH
    pub fn install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    /// Run the resolved file through `interpreter`, e.g. `python` for a script
    pub fn interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }

    pub fn help_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fixed_args(&self) -> &[String] {
        &self.fixed_args
    }

    /// Resolve the executable against the current environment
    pub fn resolve(&self) -> Option<PathBuf> {
        resolve(&self.name, self.install_dir.as_deref(), self.interpreter.is_none())
    }

    fn resolve_interpreter(&self) -> Option<Option<PathBuf>> {
        match &self.interpreter {
            Some(interpreter) => resolve(interpreter, None, true).map(Some),
            None => Some(None),
        }
    }

    /// Whether the tool (and its interpreter, if any) can be found right now
    pub fn check_installed(&self) -> bool {
        self.resolve().is_some() && self.resolve_interpreter().is_some()
    }

    /// Program to spawn and its arguments: the interpreter (if any) and the
    /// resolved tool come first, then `args`
    fn invocation<'a, I>(&self, args: I) -> Option<(PathBuf, Vec<OsString>)>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let tool = self.resolve()?;
        let (program, mut rest) = match self.resolve_interpreter()? {
            Some(interpreter) => (interpreter, vec![tool.into_os_string()]),
            None => (tool, Vec::new()),
        };
        rest.extend(args.into_iter().map(OsString::from));
        Some((program, rest))
    }

    /// The argument vector `execute` would spawn, or `None` when unresolvable
    pub fn argv(&self, user_args: &[String]) -> Option<Vec<OsString>> {
        let (program, rest) = self.invocation(self.fixed_args.iter().chain(user_args))?;
        Some(std::iter::once(program.into_os_string()).chain(rest).collect())
    }

    /// Run the tool once with `user_args` after the fixed arguments.
    ///
    /// Resolution is repeated on every call. An unresolvable tool yields the
    /// not-found result without spawning anything.
    pub fn execute(&self, user_args: &[String]) -> Result<ExecutionResult, CommandError> {
        match self.invocation(self.fixed_args.iter().chain(user_args)) {
            Some((program, args)) => self.spawn(&program, &args),
            None => {
                tracing::debug!("{} could not be resolved, skipping execution", self.name);
                Ok(ExecutionResult::not_found(self.not_found_message()))
            }
        }
    }

    fn spawn(&self, program: &Path, args: &[OsString]) -> Result<ExecutionResult, CommandError> {
        tracing::debug!("Running {} {:?}", program.display(), args);

        // output() drains both pipes and waits, so the child is always reaped
        let output = std::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CommandError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        let result = ExecutionResult::from_output(&output);
        tracing::debug!("{} exited with {}", self.name, result.return_code);
        tracing::trace!("stdout: {:?}", result.stdout);
        tracing::trace!("stderr: {:?}", result.stderr);
        Ok(result)
    }

    /// Ask the tool for `--version` and pull out the version number after `look_behind`.
    ///
    /// Fixed arguments are left out so they cannot change how the tool answers.
    pub fn version_string(&self, look_behind: &str) -> Result<String, CommandError> {
        let flag = "--version".to_string();
        let Some((program, args)) = self.invocation(std::iter::once(&flag)) else {
            return Err(CommandError::NotFound {
                name: self.name.clone(),
            });
        };
        let result = self.spawn(&program, &args)?;

        extract_version(&result.stdout, look_behind)
            .or_else(|| extract_version(&result.stderr, look_behind))
            .ok_or_else(|| CommandError::VersionFormat {
                command: self.name.clone(),
                output: result.stdout,
            })
    }

    /// Fail unless the installed version starts with `expected`
    pub fn check_version(&self, look_behind: &str, expected: &str) -> Result<(), CommandError> {
        let actual = self.version_string(look_behind)?;
        tracing::debug!("{} reports version {}", self.name, actual);
        assert_version(&self.name, &actual, expected)
    }

    /// Message used in place of tool output when the tool cannot be found
    pub fn not_found_message(&self) -> String {
        let missing = match (&self.interpreter, self.resolve().is_some()) {
            (Some(interpreter), true) => interpreter.as_str(),
            _ => self.name.as_str(),
        };
        let location = match &self.install_dir {
            Some(dir) if missing == self.name => format!("at '{}'", dir.display()),
            _ => "and on your PATH".to_string(),
        };

        let mut message = format!(
            "{}\nMake sure {} is installed {}.\n",
            problem_line(&self.name, &format!("{} not found", missing)),
            missing,
            location
        );
        if let Some(url) = &self.help_url {
            message.push_str(&format!("For more info: {}\n", url));
        }
        message
    }
}

/// First line of every message the shim writes on a tool's behalf
pub fn problem_line(command: &str, problem: &str) -> String {
    format!("Problem with {}: {}", command, problem)
}
