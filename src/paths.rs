//! Single source of truth for ALL seedrepo filesystem layout.
//!
//! This module defines WHERE things live. It has no I/O, no validation,
//! no business logic. One file shows the entire filesystem layout.
//!
//! # User-Level Paths (~/.seedrepo/)
//!
//! ```text
//! ~/.seedrepo/
//! └── config.toml              # Optional user config
//! ```
//!
//! # Generated Project Layout
//!
//! ```text
//! <base>/<name>/
//! ├── README.md, .gitignore, LICENSE, pyproject.toml, requirements.txt
//! ├── cmd/<name>.cmd
//! ├── config/<name>.env
//! ├── logs/log_levels.info     # logs/<name>.log appears when the app runs
//! ├── src/app/{main.py, __init__.py}
//! ├── src/tests/test_main.py
//! ├── data/{input,output,archive}/
//! └── docs/
//! ```

use std::path::PathBuf;

// =============================================================================
// User Level (~/.seedrepo/)
// =============================================================================

/// User's seedrepo home directory: `~/.seedrepo/`
pub fn seedrepo_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".seedrepo")
}

/// User config file: `~/.seedrepo/config.toml`
pub fn config_path() -> PathBuf {
    seedrepo_home().join("config.toml")
}

// =============================================================================
// Project Level
// =============================================================================

/// Directory manifest: logical role → path relative to the project root.
///
/// Parents are listed before children so the list can be created in order.
pub const DIRECTORY_MANIFEST: &[(&str, &str)] = &[
    ("cmd", "cmd"),
    ("logs", "logs"),
    ("config", "config"),
    ("src", "src"),
    ("app", "src/app"),
    ("tests", "src/tests"),
    ("data", "data"),
    ("data_input", "data/input"),
    ("data_output", "data/output"),
    ("data_archive", "data/archive"),
    ("docs", "docs"),
];

/// Look up a manifest directory by role.
pub fn manifest_dir(role: &str) -> Option<&'static str> {
    DIRECTORY_MANIFEST
        .iter()
        .find(|(key, _)| *key == role)
        .map(|(_, path)| *path)
}

/// Log level file: `logs/log_levels.info`
pub const LOG_LEVELS_FILE: &str = "logs/log_levels.info";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parents_precede_children() {
        for (i, (_, path)) in DIRECTORY_MANIFEST.iter().enumerate() {
            if let Some((parent, _)) = path.rsplit_once('/') {
                let parent_pos = DIRECTORY_MANIFEST
                    .iter()
                    .position(|(_, p)| *p == parent)
                    .expect("parent listed in manifest");
                assert!(parent_pos < i, "{} listed before {}", parent, path);
            }
        }
    }

    #[test]
    fn test_manifest_lookup() {
        assert_eq!(manifest_dir("app"), Some("src/app"));
        assert_eq!(manifest_dir("data_archive"), Some("data/archive"));
        assert_eq!(manifest_dir("nope"), None);
    }

    #[test]
    fn test_config_under_home() {
        assert!(config_path().ends_with(".seedrepo/config.toml"));
    }
}
