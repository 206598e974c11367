//! Open the new project in the user's editor.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Launch `<editor> .` from the project root without waiting for it.
///
/// Returns `Ok(false)` when the editor binary is not on `PATH`.
pub fn open(root: &Path, editor: &str) -> Result<bool> {
    let Ok(binary) = which::which(editor) else {
        tracing::debug!(editor, "editor not found on PATH");
        return Ok(false);
    };

    Command::new(binary)
        .arg(".")
        .current_dir(root)
        .spawn()
        .with_context(|| format!("Failed to launch editor `{}`", editor))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_editor_is_skipped() {
        let temp = tempfile::TempDir::new().unwrap();
        let opened = open(temp.path(), "seedrepo-no-such-editor-binary").unwrap();
        assert!(!opened);
    }
}
