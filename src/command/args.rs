//! Helpers for shaping argument lists before a tool is run

use std::path::Path;

/// Append `new_args` unless an argument with the same key is already present.
///
/// The key is the text before the first `=`, so `--style=file` blocks a default
/// of `--style=google`. `new_args` is usually one option, or an option and its value.
pub fn add_if_missing(args: &mut Vec<String>, new_args: &[String]) {
    let Some(first) = new_args.first() else {
        return;
    };
    if contains_key(args, first) {
        return;
    }
    args.extend(new_args.iter().cloned());
}

/// Whether an argument with the same key as `arg` is already in `args`
pub fn contains_key(args: &[String], arg: &str) -> bool {
    let key = arg_key(arg);
    args.iter().any(|existing| arg_key(existing) == key)
}

fn arg_key(arg: &str) -> &str {
    arg.split('=').next().unwrap_or(arg)
}

/// Separate existing file paths from flags and option values.
///
/// `.cfg` files are tool settings (`uncrustify -c style.cfg`), never sources,
/// so they stay with the flags. Relative order is kept inside both groups.
pub fn split_paths(args: &[String]) -> (Vec<String>, Vec<String>) {
    args.iter().cloned().partition(|arg| !is_source_file(arg))
}

fn is_source_file(arg: &str) -> bool {
    let path = Path::new(arg);
    !arg.starts_with('-')
        && path.is_file()
        && path.extension().is_none_or(|ext| ext != "cfg")
}
