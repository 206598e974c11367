//! Directory tree and placeholder files for a new project.
//!
//! "Do X": Materialize the fixed project layout on disk.
//!
//! Every operation is anchored at an explicit project root. Nothing here
//! changes the process working directory.

pub mod templates;

use std::fs;
use std::path::Path;

use crate::error::{Result, SeedError};

/// Fail with `AlreadyExists` if the project root is already on disk.
///
/// Called before any remote or local mutation.
pub fn ensure_absent(root: &Path) -> Result<()> {
    if root.exists() {
        return Err(SeedError::AlreadyExists {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Create the project root. Its parent must exist; the root itself must not.
pub fn create_root(root: &Path) -> Result<()> {
    fs::create_dir(root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            SeedError::AlreadyExists {
                path: root.to_path_buf(),
            }
        } else {
            SeedError::io(root, e)
        }
    })?;
    tracing::debug!(root = %root.display(), "created project root");
    Ok(())
}

/// Create one directory relative to the root, tolerating an existing one.
pub fn create_subdir(root: &Path, rel: &str) -> Result<()> {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).map_err(|e| SeedError::io(&dir, e))?;
    tracing::trace!(path = rel, "created directory");
    Ok(())
}

/// Write one file relative to the root.
pub fn write_file(root: &Path, rel: &str, content: &str) -> Result<()> {
    let path = root.join(rel);
    fs::write(&path, content).map_err(|e| SeedError::io(&path, e))?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "wrote placeholder");
    Ok(())
}
