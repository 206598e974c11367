//! Remote-mode scaffolding against an in-memory forge.
//!
//! The "remote" is a bare repository in a temp dir, so pushes stay local.
//!
//! Run with: cargo test --test init_remote

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Once;

use seedrepo::commands::init::{self, InitOptions};
use seedrepo::error::Result;
use seedrepo::forge::{ForgeWriter, RemoteRepo};
use seedrepo::pipeline::Step;
use seedrepo::{git, Config, Mode, ProjectSpec, SeedError, StepPolicy};
use tempfile::TempDir;

#[derive(Clone, Copy)]
enum Behavior {
    Succeed,
    RejectToken,
    NameTaken,
}

/// Records calls and checks that the local root does not exist yet.
struct FakeForge {
    behavior: Behavior,
    clone_url: String,
    watched_root: PathBuf,
    calls: RefCell<Vec<String>>,
}

impl FakeForge {
    fn new(behavior: Behavior, clone_url: impl Into<String>, watched_root: &Path) -> Self {
        Self {
            behavior,
            clone_url: clone_url.into(),
            watched_root: watched_root.to_path_buf(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ForgeWriter for FakeForge {
    fn authenticate(&self) -> Result<String> {
        self.calls.borrow_mut().push("authenticate".to_string());
        match self.behavior {
            Behavior::RejectToken => Err(SeedError::AuthError("Bad credentials".to_string())),
            _ => Ok("octocat".to_string()),
        }
    }

    fn create_repo(&self, name: &str) -> Result<RemoteRepo> {
        self.calls.borrow_mut().push(format!("create_repo {}", name));
        assert!(
            !self.watched_root.exists(),
            "remote must be created before anything local"
        );
        match self.behavior {
            Behavior::NameTaken => Err(SeedError::RemoteConflict {
                name: name.to_string(),
            }),
            _ => Ok(RemoteRepo {
                owner_login: "octocat".to_string(),
                name: name.to_string(),
                clone_url: self.clone_url.clone(),
            }),
        }
    }
}

static GIT_IDENTITY: Once = Once::new();

/// Git needs an identity to commit; give child processes one.
fn git_ready() -> bool {
    if which::which("git").is_err() {
        eprintln!("git not found, skipping");
        return false;
    }
    GIT_IDENTITY.call_once(|| {
        for (key, value) in [
            ("GIT_AUTHOR_NAME", "seedrepo test"),
            ("GIT_AUTHOR_EMAIL", "test@example.com"),
            ("GIT_COMMITTER_NAME", "seedrepo test"),
            ("GIT_COMMITTER_EMAIL", "test@example.com"),
        ] {
            std::env::set_var(key, value);
        }
    });
    true
}

fn bare_remote(dir: &Path) -> String {
    let bare = dir.join("remote.git");
    let status = Command::new("git")
        .args(["init", "--bare"])
        .arg(&bare)
        .output()
        .unwrap()
        .status;
    assert!(status.success());
    bare.to_string_lossy().to_string()
}

fn branch_exists(git_dir: &str, branch: &str) -> bool {
    Command::new("git")
        .args(["--git-dir", git_dir, "rev-parse", "--verify"])
        .arg(format!("refs/heads/{}", branch))
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn config_for(base: &Path, policy: StepPolicy) -> Config {
    Config {
        base_path: base.to_path_buf(),
        editor: None,
        policy,
        ..Config::default()
    }
}

fn quiet() -> InitOptions {
    InitOptions {
        no_editor: true,
        dry_run: false,
    }
}

#[test]
fn test_remote_mode_pushes_main_and_checks_out_develop() {
    if !git_ready() {
        return;
    }
    let base = TempDir::new().unwrap();
    let remotes = TempDir::new().unwrap();
    let bare = bare_remote(remotes.path());
    let root = base.path().join("demo");
    let forge = FakeForge::new(Behavior::Succeed, bare.clone(), &root);

    let spec = ProjectSpec::new("demo", base.path(), Mode::Remote).unwrap();
    let config = config_for(base.path(), StepPolicy::Strict);
    let mut out = Vec::new();

    let summary = init::execute(&spec, &config, &forge, &quiet(), &mut out).unwrap();

    assert_eq!(forge.calls(), vec!["authenticate", "create_repo demo"]);
    assert_eq!(summary.remote.as_ref().unwrap().clone_url, bare);
    assert!(summary.report.is_clean());

    assert!(branch_exists(&bare, "main"));
    assert!(!branch_exists(&bare, "develop"));
    assert_eq!(git::current_branch(&root).unwrap(), "develop");
    assert_eq!(git::remote_url(&root, "origin").unwrap(), bare);
}

#[test]
fn test_push_failure_is_reported_under_best_effort() {
    if !git_ready() {
        return;
    }
    let base = TempDir::new().unwrap();
    let root = base.path().join("demo");
    let unreachable = base.path().join("no-such-remote.git");
    let forge = FakeForge::new(
        Behavior::Succeed,
        unreachable.to_string_lossy().to_string(),
        &root,
    );

    let spec = ProjectSpec::new("demo", base.path(), Mode::Remote).unwrap();
    let config = config_for(base.path(), StepPolicy::BestEffort);
    let mut out = Vec::new();

    let summary = init::execute(&spec, &config, &forge, &quiet(), &mut out).unwrap();

    let failed: Vec<String> = summary
        .report
        .failures()
        .map(|(step, _)| step.to_string())
        .collect();
    assert_eq!(failed, vec!["git push -u origin main"]);
    // the sequence kept going after the push
    assert_eq!(git::current_branch(&root).unwrap(), "develop");

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("with failed steps"));
    // the push error is shown once, in the summary
    let (_, message) = summary.report.failures().next().unwrap();
    assert_eq!(printed.matches(message).count(), 1, "{}", printed);
}

#[test]
fn test_push_failure_aborts_under_strict() {
    if !git_ready() {
        return;
    }
    let base = TempDir::new().unwrap();
    let root = base.path().join("demo");
    let unreachable = base.path().join("no-such-remote.git");
    let forge = FakeForge::new(
        Behavior::Succeed,
        unreachable.to_string_lossy().to_string(),
        &root,
    );

    let spec = ProjectSpec::new("demo", base.path(), Mode::Remote).unwrap();
    let config = config_for(base.path(), StepPolicy::Strict);
    let mut out = Vec::new();

    let err = init::execute(&spec, &config, &forge, &quiet(), &mut out).unwrap_err();
    let push = Step::GitPush {
        remote: "origin".into(),
        branch: "main".into(),
    };
    assert!(matches!(err, SeedError::StepFailed { ref step, .. } if *step == push.to_string()));
    assert_eq!(git::current_branch(&root).unwrap(), "main");
}

#[test]
fn test_rejected_token_creates_nothing() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("demo");
    let forge = FakeForge::new(Behavior::RejectToken, "unused", &root);

    let spec = ProjectSpec::new("demo", base.path(), Mode::Remote).unwrap();
    let config = config_for(base.path(), StepPolicy::BestEffort);
    let mut out = Vec::new();

    let err = init::execute(&spec, &config, &forge, &quiet(), &mut out).unwrap_err();
    assert!(matches!(err, SeedError::AuthError(_)));
    assert_eq!(forge.calls(), vec!["authenticate"]);
    assert!(!root.exists());
}

#[test]
fn test_name_conflict_creates_nothing_locally() {
    let base = TempDir::new().unwrap();
    let root = base.path().join("demo");
    let forge = FakeForge::new(Behavior::NameTaken, "unused", &root);

    let spec = ProjectSpec::new("demo", base.path(), Mode::Remote).unwrap();
    let config = config_for(base.path(), StepPolicy::BestEffort);
    let mut out = Vec::new();

    let err = init::execute(&spec, &config, &forge, &quiet(), &mut out).unwrap_err();
    assert!(matches!(err, SeedError::RemoteConflict { ref name } if name == "demo"));
    assert!(!root.exists());
}
