//! Git plumbing for a freshly scaffolded project
//!
//! Handles:
//! - Repository initialization and the initial commit
//! - Branch naming (`main`, `develop`)
//! - Remote linking and the first push

mod operations;

pub use operations::{
    add_all, add_remote, branch_rename, checkout_new_branch, commit, current_branch, init,
    push_upstream, remote_url,
};

/// Branch pushed to the remote
pub const MAIN_BRANCH: &str = "main";

/// Branch checked out locally after the push
pub const DEVELOP_BRANCH: &str = "develop";

pub const REMOTE_NAME: &str = "origin";

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
