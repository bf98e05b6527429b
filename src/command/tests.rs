//! Command execution tests

use super::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str, mode: u32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

#[test]
fn test_empty_name_rejected() {
    assert!(matches!(Command::new(""), Err(CommandError::EmptyName)));
    assert!(matches!(Command::new("  "), Err(CommandError::EmptyName)));
}

#[test]
fn test_builder_keeps_argument_order() {
    let command = Command::new("tool")
        .unwrap()
        .args(["-a", "-b"])
        .args(vec!["-c".to_string()])
        .add_if_missing(&strings(&["-a"]))
        .add_if_missing(&strings(&["--quiet"]));
    assert_eq!(command.fixed_args(), strings(&["-a", "-b", "-c", "--quiet"]).as_slice());
}

#[test]
fn test_nonexistent_tool_is_not_found() {
    let command = Command::new("nonexistent-tool-xyz").unwrap();
    assert!(!command.check_installed());

    let result = command.execute(&[]).unwrap();
    assert_eq!(result.return_code, NOT_FOUND_CODE);
    assert_eq!(result.outcome(), Outcome::NotFound);
    assert!(!result.stderr.is_empty());
    assert!(result.stderr.contains("nonexistent-tool-xyz not found"));
    assert!(result.stderr.contains("on your PATH"));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_not_found_code_independent_of_arguments() {
    let command = Command::new("nonexistent-tool-xyz").unwrap().args(["--fixed"]);
    for args in [vec![], strings(&["a"]), strings(&["--flag", "file.c", "other.c"])] {
        let result = command.execute(&args).unwrap();
        assert_eq!(result.return_code, NOT_FOUND_CODE);
        assert!(result.is_not_found());
    }
    assert!(command.argv(&[]).is_none());
}

#[test]
fn test_not_found_message_includes_help_url() {
    let command = Command::new("nonexistent-tool-xyz")
        .unwrap()
        .help_url("https://example.com/docs");
    let message = command.not_found_message();
    assert!(message.starts_with("Problem with nonexistent-tool-xyz: nonexistent-tool-xyz not found\n"));
    assert!(message.ends_with("For more info: https://example.com/docs\n"));
}

#[test]
fn test_not_found_message_names_install_dir() {
    let temp_dir = TempDir::new().unwrap();
    let command = Command::new("tool").unwrap().install_dir(temp_dir.path());
    let message = command.execute(&[]).unwrap().stderr;
    assert!(message.contains(&format!("at '{}'", temp_dir.path().display())));
}

#[cfg(unix)]
#[test]
fn test_echo_fixed_then_user_arguments() {
    let command = Command::new("echo").unwrap().args(["hello"]);
    assert!(command.check_installed());

    let result = command.execute(&strings(&["world"])).unwrap();
    assert_eq!(result.return_code, 0);
    assert_eq!(result.outcome(), Outcome::Success);
    assert!(result.stdout.contains("hello world"));
}

#[cfg(unix)]
#[test]
fn test_argument_order_preserved() {
    let command = Command::new("sh")
        .unwrap()
        .args(["-c", "printf '%s|' \"$@\"", "sh", "f1", "f2"]);

    let result = command.execute(&strings(&["u1", "u2", "u3"])).unwrap();
    assert_eq!(result.stdout, "f1|f2|u1|u2|u3|");

    let result = command.execute(&[]).unwrap();
    assert_eq!(result.stdout, "f1|f2|");
}

#[cfg(unix)]
#[test]
fn test_argv_layout() {
    let command = Command::new("sh").unwrap().args(["-c", "true"]);
    let argv = command.argv(&strings(&["x"])).unwrap();
    assert_eq!(argv.len(), 4);
    assert_eq!(PathBuf::from(&argv[0]), command.resolve().unwrap());
    assert_eq!(argv[1], "-c");
    assert_eq!(argv[2], "true");
    assert_eq!(argv[3], "x");
}

#[cfg(unix)]
#[test]
fn test_failing_tool_reports_stderr() {
    let command = Command::new("sh")
        .unwrap()
        .args(["-c", "echo 'something broke' >&2; exit 1"]);

    let result = command.execute(&[]).unwrap();
    assert_eq!(result.return_code, 1);
    assert_eq!(result.outcome(), Outcome::ToolFailure(1));
    assert!(!result.stderr.is_empty());
    assert!(result.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_streams_captured_separately() {
    let command = Command::new("sh")
        .unwrap()
        .args(["-c", "echo out; echo err >&2; exit 3"]);

    let result = command.execute(&[]).unwrap();
    assert_eq!(result.return_code, 3);
    assert_eq!(result.stdout, "out\n");
    assert_eq!(result.stderr, "err\n");
}

#[cfg(unix)]
#[test]
fn test_execute_is_repeatable() {
    let command = Command::new("sh").unwrap().args(["-c", "echo same; exit 4"]);
    let first = command.execute(&[]).unwrap();
    let second = command.execute(&[]).unwrap();
    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn test_check_installed_agrees_with_execute() {
    for name in ["sh", "nonexistent-tool-xyz"] {
        let command = Command::new(name).unwrap().args(["-c", "exit 0"]);
        let installed = command.check_installed();
        let result = command.execute(&[]).unwrap();
        assert_eq!(installed, !result.is_not_found(), "disagreement for {}", name);
    }
}

#[cfg(unix)]
#[test]
fn test_install_dir_resolution() {
    let temp_dir = TempDir::new().unwrap();
    write_script(temp_dir.path(), "mock-cli", "echo \"mock $*\"", 0o755);

    let command = Command::new("mock-cli")
        .unwrap()
        .install_dir(temp_dir.path())
        .args(["--a-flag"]);
    assert!(command.check_installed());

    let result = command.execute(&strings(&["file.c"])).unwrap();
    assert_eq!(result.return_code, 0);
    assert_eq!(result.stdout, "mock --a-flag file.c\n");
}

#[cfg(unix)]
#[test]
fn test_non_executable_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    write_script(temp_dir.path(), "mock-cli", "exit 0", 0o644);

    let command = Command::new("mock-cli").unwrap().install_dir(temp_dir.path());
    assert!(!command.check_installed());
    assert!(command.execute(&[]).unwrap().is_not_found());
}

#[cfg(unix)]
#[test]
fn test_interpreter_runs_non_executable_script() {
    let temp_dir = TempDir::new().unwrap();
    write_script(temp_dir.path(), "mock-cli", "echo \"args: $*\"", 0o644);

    let command = Command::new("mock-cli")
        .unwrap()
        .install_dir(temp_dir.path())
        .interpreter("sh")
        .args(["--fixed"]);
    assert!(command.check_installed());

    let result = command.execute(&strings(&["user"])).unwrap();
    assert_eq!(result.return_code, 0);
    assert_eq!(result.stdout, "args: --fixed user\n");
}

#[cfg(unix)]
#[test]
fn test_missing_interpreter_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    write_script(temp_dir.path(), "mock-cli", "exit 0", 0o644);

    let command = Command::new("mock-cli")
        .unwrap()
        .install_dir(temp_dir.path())
        .interpreter("nonexistent-interpreter-xyz");
    assert!(!command.check_installed());

    let result = command.execute(&[]).unwrap();
    assert!(result.is_not_found());
    assert!(result.stderr.contains("nonexistent-interpreter-xyz not found"));
}

#[cfg(unix)]
#[test]
fn test_version_string_and_check() {
    let temp_dir = TempDir::new().unwrap();
    write_script(
        temp_dir.path(),
        "mock-cli",
        "if [ \"$1\" = \"--version\" ]; then echo 'CLI 1.0.0'; fi",
        0o755,
    );
    let command = Command::new("mock-cli").unwrap().install_dir(temp_dir.path());

    assert_eq!(command.version_string("CLI ").unwrap(), "1.0.0");
    assert!(command.check_version("CLI ", "1.0").is_ok());
    assert!(matches!(
        command.check_version("CLI ", "1.0.1"),
        Err(CommandError::VersionMismatch { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_version_format_error() {
    let temp_dir = TempDir::new().unwrap();
    write_script(temp_dir.path(), "mock-cli", "echo 'no version here'", 0o755);
    let command = Command::new("mock-cli").unwrap().install_dir(temp_dir.path());

    assert!(matches!(
        command.version_string(""),
        Err(CommandError::VersionFormat { .. })
    ));
}

#[test]
fn test_version_of_missing_tool() {
    let command = Command::new("nonexistent-tool-xyz").unwrap();
    assert!(matches!(
        command.version_string(""),
        Err(CommandError::NotFound { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_version_ignores_fixed_arguments() {
    let temp_dir = TempDir::new().unwrap();
    write_script(
        temp_dir.path(),
        "mock-cli",
        "if [ \"$1\" = \"--version\" ]; then echo 'CLI 1.0.0'; fi",
        0o755,
    );
    let command = Command::new("mock-cli")
        .unwrap()
        .install_dir(temp_dir.path())
        .args(["--a-flag"]);

    assert_eq!(command.version_string("CLI ").unwrap(), "1.0.0");
    assert!(command.check_version("CLI ", "1.0").is_ok());
}

#[cfg(unix)]
#[test]
fn test_execute_spawns_once_per_call() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("runs.log");
    write_script(
        temp_dir.path(),
        "mock-cli",
        &format!("echo run >> '{}'", log.display()),
        0o755,
    );
    let command = Command::new("mock-cli").unwrap().install_dir(temp_dir.path());
    let runs = || fs::read_to_string(&log).unwrap().lines().count();

    command.execute(&[]).unwrap();
    assert_eq!(runs(), 1);

    command.execute(&strings(&["file.c"])).unwrap();
    assert_eq!(runs(), 2);
}
