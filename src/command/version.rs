//! Tool version pinning
//!
//! Hooks can require a specific tool version. The tool is asked for `--version`
//! and the first dotted version number after an optional look-behind text is
//! compared against the pinned value.

use crate::error::CommandError;
use regex::Regex;

/// Version number as printed by most tools: `8.0.0`, `1.2.3-rc1`, `14.0.6_1`
const VERSION_PATTERN: &str = r"((?:\d+\.)+[\d+_\+\-a-z]+)";

/// Find the version number that follows `look_behind` in `text`
pub fn extract_version(text: &str, look_behind: &str) -> Option<String> {
    let pattern = format!("{}{}", regex::escape(look_behind), VERSION_PATTERN);
    let regex = Regex::new(&pattern).ok()?;
    regex
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str().to_string())
}

/// Fail unless `actual` starts with `expected`, so `8.0` accepts `8.0.1`
pub fn assert_version(command: &str, actual: &str, expected: &str) -> Result<(), CommandError> {
    if actual.starts_with(expected) {
        return Ok(());
    }
    Err(CommandError::VersionMismatch {
        command: command.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}
