//! Error taxonomy for a scaffolding run.
//!
//! Filesystem and forge failures are typed so callers (and tests) can match on
//! them. Child-process helpers in `git` still speak `anyhow`; the pipeline folds
//! those into [`SeedError::StepFailed`].

use std::path::PathBuf;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, SeedError>;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Token missing, empty, or rejected by the forge.
    #[error("authentication failed: {0}")]
    AuthError(String),

    /// A repository with this name already exists for the account.
    #[error("repository '{name}' already exists on the remote")]
    RemoteConflict { name: String },

    /// The project root is already on disk. Nothing is merged or overwritten.
    #[error("project directory already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("forge request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The forge answered with an unexpected status.
    #[error("forge returned {status}: {message}")]
    Forge { status: u16, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// A sequencer step failed under the strict policy.
    #[error("step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },
}

impl SeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SeedError::IoFailure {
            path: path.into(),
            source,
        }
    }
}
