//! Typed sequencer operations.

use std::fmt;
use std::path::Path;

use crate::error::SeedError;
use crate::{git, scaffold};

/// One operation in the command sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Create a directory relative to the project root (existing is fine)
    CreateDir { path: String },
    /// Write a file relative to the project root, overwriting
    WriteFile { path: String, content: String },
    GitInit,
    GitAddAll,
    GitCommit { message: String },
    GitBranchRename { branch: String },
    GitRemoteAdd { remote: String, url: String },
    GitPush { remote: String, branch: String },
    GitCheckoutNew { branch: String },
}

impl Step {
    /// Filesystem steps; these always abort the run on failure.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Step::CreateDir { .. } | Step::WriteFile { .. })
    }

    /// Run the step with `root` as its working directory.
    pub fn run(&self, root: &Path) -> Result<(), SeedError> {
        match self {
            Step::CreateDir { path } => scaffold::create_subdir(root, path),
            Step::WriteFile { path, content } => scaffold::write_file(root, path, content),
            Step::GitInit => vcs(self, git::init(root)),
            Step::GitAddAll => vcs(self, git::add_all(root)),
            Step::GitCommit { message } => vcs(self, git::commit(root, message)),
            Step::GitBranchRename { branch } => vcs(self, git::branch_rename(root, branch)),
            Step::GitRemoteAdd { remote, url } => vcs(self, git::add_remote(root, remote, url)),
            Step::GitPush { remote, branch } => vcs(self, git::push_upstream(root, remote, branch)),
            Step::GitCheckoutNew { branch } => vcs(self, git::checkout_new_branch(root, branch)),
        }
    }
}

fn vcs(step: &Step, result: anyhow::Result<()>) -> Result<(), SeedError> {
    result.map_err(|e| SeedError::StepFailed {
        step: step.to_string(),
        message: format!("{:#}", e),
    })
}

/// Shell-equivalent rendering, printed before each step runs.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateDir { path } => write!(f, "mkdir -p {}", path),
            Step::WriteFile { path, .. } => write!(f, "write {}", path),
            Step::GitInit => write!(f, "git init"),
            Step::GitAddAll => write!(f, "git add ."),
            Step::GitCommit { message } => write!(f, "git commit -m \"{}\"", message),
            Step::GitBranchRename { branch } => write!(f, "git branch -M {}", branch),
            Step::GitRemoteAdd { remote, url } => write!(f, "git remote add {} {}", remote, url),
            Step::GitPush { remote, branch } => write!(f, "git push -u {} {}", remote, branch),
            Step::GitCheckoutNew { branch } => write!(f, "git checkout -b {}", branch),
        }
    }
}
