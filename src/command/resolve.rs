//! Executable resolution
//!
//! Turns a bare program name into a runnable path. Nothing is cached: the PATH
//! may change between hook runs, so every call asks the host again.

use std::path::{Path, PathBuf};

/// Resolve `name` on the PATH, or inside `install_dir` when one is given.
///
/// Files without execute permission are treated as absent unless `require_executable`
/// is false (a configured interpreter will run the file instead).
pub fn resolve(name: &str, install_dir: Option<&Path>, require_executable: bool) -> Option<PathBuf> {
    match install_dir {
        Some(dir) => {
            let candidate = dir.join(name);
            if !candidate.is_file() {
                tracing::debug!("{} does not exist or is not a file", candidate.display());
                return None;
            }
            if require_executable && !is_executable(&candidate) {
                tracing::debug!("{} is not executable", candidate.display());
                return None;
            }
            Some(std::path::absolute(&candidate).unwrap_or(candidate))
        }
        None => {
            // Scripts handed to an interpreter only need to exist on the PATH.
            let found = which::which(name)
                .ok()
                .or_else(|| if require_executable { None } else { find_on_path(name) });
            match &found {
                Some(path) => tracing::debug!("Resolved {} to {}", name, path.display()),
                None => tracing::debug!("{} not found on PATH", name),
            }
            found
        }
    }
}

/// Plain PATH walk without the executable check
fn find_on_path(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
