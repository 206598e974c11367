//! Low-level git operations
//!
//! Every operation runs `git` with the given repository as its working
//! directory.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

fn git(repo: &Path, args: &[&str]) -> Result<Output> {
    tracing::debug!(repo = %repo.display(), ?args, "git");
    Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .with_context(|| format!("Failed to run `git {}`. Is git installed?", args.join(" ")))
}

fn ensure_success(output: &Output, what: &str) -> Result<()> {
    if !output.status.success() {
        anyhow::bail!(
            "Failed to {}: {}",
            what,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

/// Check if a directory is a git repository
#[cfg(test)]
fn is_git_repo(repo: &Path) -> Result<bool> {
    let output = git(repo, &["rev-parse", "--git-dir"])?;
    Ok(output.status.success())
}

/// Initialize a new repository
pub fn init(repo: &Path) -> Result<()> {
    let output = git(repo, &["init"])?;
    ensure_success(&output, "initialize repository")
}

/// Stage all changes
pub fn add_all(repo: &Path) -> Result<()> {
    let output = git(repo, &["add", "."])?;
    ensure_success(&output, "stage changes")
}

/// Create a commit
pub fn commit(repo: &Path, message: &str) -> Result<()> {
    let output = git(repo, &["commit", "-m", message])?;
    ensure_success(&output, "create commit")
}

/// Rename the current branch, overwriting any branch of that name
pub fn branch_rename(repo: &Path, new: &str) -> Result<()> {
    let output = git(repo, &["branch", "-M", new])?;
    ensure_success(&output, "rename branch")
}

/// Add a git remote
pub fn add_remote(repo: &Path, name: &str, url: &str) -> Result<()> {
    let output = git(repo, &["remote", "add", name, url])?;
    ensure_success(&output, "add remote")
}

/// Push a branch and set it as upstream
pub fn push_upstream(repo: &Path, remote: &str, branch: &str) -> Result<()> {
    let output = git(repo, &["push", "-u", remote, branch])?;
    ensure_success(&output, &format!("push {} to {}", branch, remote))
}

/// Create and checkout a new branch from HEAD
pub fn checkout_new_branch(repo: &Path, name: &str) -> Result<()> {
    let output = git(repo, &["checkout", "-b", name])?;
    ensure_success(&output, &format!("create branch {}", name))
}

/// Get the current branch name
pub fn current_branch(repo: &Path) -> Result<String> {
    let output = git(repo, &["branch", "--show-current"])?;
    ensure_success(&output, "get current branch")?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Get remote URL
pub fn remote_url(repo: &Path, remote: &str) -> Result<String> {
    let output = git(repo, &["remote", "get-url", remote])?;
    if !output.status.success() {
        anyhow::bail!("Remote '{}' not found", remote);
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
