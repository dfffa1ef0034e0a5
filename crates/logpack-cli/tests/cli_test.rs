//! End-to-end tests for the logpack binary
//!
//! Each test runs the built binary with piped stdin and an isolated config
//! file inside a temp directory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::{tempdir, TempDir};

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempdir().unwrap(),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    fn run(&self, args: &[&str], stdin: &str) -> Output {
        run_with_config(&self.config_path(), self.dir.path(), args, stdin)
    }
}

fn run_with_config(config: &Path, home: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_logpack"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start logpack");

    // The child may exit without reading, e.g. on a config error
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

// ==========================================
// Calculator scenarios
// ==========================================

#[test]
fn test_scenario_one_meter() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[], "1.0\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("Welcome to the ATREE logging company's"));
    assert!(text.contains("LOG LENGTHS (m): [0.25, 0.5, 1.0]\n"));
    assert!(text.ends_with("Enter the length of the log (m): Log Amount : 55\n"));
}

#[test]
fn test_scenario_offered_lengths() {
    let sandbox = Sandbox::new();
    for (input, expected) in [("0.5", "110"), ("0.25", "220"), ("0.3", "183")] {
        let output = sandbox.run(&["-q"], &format!("{input}\n"));
        assert_eq!(
            stdout(&output),
            format!("Enter the length of the log (m): Log Amount : {expected}\n")
        );
    }
}

#[test]
fn test_scenario_negative_length() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["-q"], "-1\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Enter the length of the log (m): ERROR: INVALID LOG LENGTH.\n"
    );
}

#[test]
fn test_scenario_non_numeric() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["-q"], "abc\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Enter the length of the log (m): ERROR: LOG LENGTH MUST BE NUMERIC.\n"
    );
}

#[test]
fn test_piped_output_is_uncolored() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[], "1\n");
    assert!(!stdout(&output).contains('\x1b'));
}

#[test]
fn test_color_always() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["-q", "--color", "always"], "-1\n");
    assert!(stdout(&output).contains("\x1b[31mERROR: INVALID LOG LENGTH."));
}

#[test]
fn test_length_flag() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["calc", "-q", "--length", "0.5"], "");
    assert_eq!(stdout(&output), "Log Amount : 110\n");
}

#[test]
fn test_retry_flag() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["calc", "-q", "--retry"], "abc\n-1\n0.5\n");
    let text = stdout(&output);
    assert_eq!(text.matches("Enter the length of the log (m): ").count(), 3);
    assert!(text.ends_with("Log Amount : 110\n"));
}

#[test]
fn test_json_format() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--format", "json"], "0.3\n");
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["log_amount_rounded"], 183.0);
}

#[test]
fn test_lengths_command() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["lengths"], "");
    let text = stdout(&output);
    assert!(text.contains("      0.25         220"));
    assert!(text.contains("       0.5         110"));
    assert!(text.contains("       1.0          55"));
}

// ==========================================
// Configuration
// ==========================================

#[test]
fn test_config_persists_settings() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "--set-strict", "true", "--set-banner", "false"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Configuration updated"));
    assert!(sandbox.config_path().exists());

    let output = sandbox.run(&[], "0.3\n");
    assert_eq!(
        stdout(&output),
        "Enter the length of the log (m): ERROR: LOG LENGTH NOT OFFERED.\n"
    );

    sandbox.run(&["config", "--reset"], "");
    let output = sandbox.run(&["-q"], "0.3\n");
    assert!(stdout(&output).ends_with("Log Amount : 183\n"));
}

#[test]
fn test_corrupt_config_exits_with_error() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.config_path(), "{ not json").unwrap();

    let output = sandbox.run(&[], "1\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: Configuration error"));
}
