//! Formatter hooks
//!
//! A formatter passes when running it changes nothing. Tools that print the
//! formatted file are compared against the file on disk; tools that rewrite
//! the file in place are compared against a snapshot taken before the run.

use crate::command::{Command, ExecutionResult, problem_line, split_paths};
use crate::error::CommandError;
use similar::TextDiff;
use std::fs;
use std::path::Path;

const HEADER_RULE: &str = "====================";

/// Run the formatter on every file in `user_args` and collect the diffs.
///
/// Arguments that are not existing files are passed to every run as flags.
pub fn compare_to_formatted(
    command: &Command,
    user_args: &[String],
    edit_in_place: bool,
) -> Result<ExecutionResult, CommandError> {
    if !command.check_installed() {
        return Ok(ExecutionResult::not_found(command.not_found_message()));
    }

    let (flags, paths) = split_paths(user_args);
    let mut stdout = String::new();
    let mut stderr = String::new();
    let mut return_code = 0;

    for path in &paths {
        let original = read_file(path)?;

        let mut args = flags.clone();
        args.push(path.clone());
        let run = command.execute(&args)?;
        if run.is_not_found() {
            return Ok(run);
        }

        let formatted = if edit_in_place {
            stdout.push_str(&run.stdout);
            if !run.success() {
                stderr.push_str(&run.stderr);
                return_code = run.return_code;
                continue;
            }
            read_file(path)?
        } else {
            if !run.success() || !run.stderr.is_empty() {
                stderr.push_str(&format!(
                    "{}\n{}{}",
                    problem_line(
                        command.name(),
                        &format!("Unexpected stderr/return code received when analyzing {}", path)
                    ),
                    run.stdout,
                    run.stderr
                ));
                return_code = 1;
                continue;
            }
            run.stdout
        };

        if let Some(diff) = unified_diff(&original, &formatted) {
            tracing::debug!("{} would reformat {}", command.name(), path);
            stderr.push_str(&format!("{}\n{}\n{}", path, HEADER_RULE, diff));
            if return_code == 0 {
                return_code = 1;
            }
        }
    }

    Ok(ExecutionResult::completed(return_code, stdout, stderr))
}

/// Unified diff between the file as it is and as the formatter wants it, `None` when equal
pub fn unified_diff(original: &str, formatted: &str) -> Option<String> {
    if original == formatted {
        return None;
    }
    let diff = TextDiff::from_lines(original, formatted)
        .unified_diff()
        .header("original", "formatted")
        .to_string();
    Some(diff)
}

fn read_file(path: &str) -> Result<String, CommandError> {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(|source| CommandError::ReadFile {
            path: Path::new(path).to_path_buf(),
            source,
        })
}
