//! Command-line contract of the `seedrepo` binary.
//!
//! Run with: cargo test --test cli

use std::path::Path;
use std::process::{Command, Output};

use seedrepo::config::{BASE_PATH_VARS, TOKEN_VARS};
use tempfile::TempDir;

/// Run the binary with an isolated home and base path.
fn seedrepo(args: &[&str], base: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seedrepo"));
    cmd.args(args)
        .env("HOME", base)
        .env("SEEDREPO_BASE", base)
        .env_remove("SEEDREPO_LOG");
    for var in BASE_PATH_VARS.iter().chain(TOKEN_VARS) {
        if *var != "SEEDREPO_BASE" {
            cmd.env_remove(var);
        }
    }
    cmd.output().unwrap()
}

fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[test]
fn test_bad_usage_prints_hint_and_exits_zero() {
    let cases: &[&[&str]] = &[
        &[],
        &["demo"],
        &["demo", "x"],
        &["demo", "-x"],
        &["demo", "l", "extra"],
        &["--bogus"],
    ];

    for args in cases {
        let base = TempDir::new().unwrap();
        let output = seedrepo(args, base.path());
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success(), "{:?} exited with {}", args, output.status);
        assert!(
            stdout.contains("usage: seedrepo <folder_name> <g|l>"),
            "{:?} printed {:?}",
            args,
            stdout
        );
        assert!(is_empty_dir(base.path()), "{:?} touched the base path", args);
    }
}

#[test]
fn test_help_keeps_clap_output() {
    let base = TempDir::new().unwrap();
    let output = seedrepo(&["--help"], base.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--dry-run"), "{}", stdout);
    assert!(!stdout.contains("usage: seedrepo <folder_name>"));
}

#[test]
fn test_dry_run_through_binary_touches_nothing() {
    let base = TempDir::new().unwrap();
    let output = seedrepo(&["demo", "l", "--dry-run", "--no-editor"], base.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("git init"), "{}", stdout);
    assert!(!base.path().join("demo").exists());
}
