//! Run configuration.
//!
//! Resolved once in `main` and passed into the pipeline, so nothing below the
//! entry point reads the process environment.
//!
//! Resolution order (later wins):
//! 1. Defaults
//! 2. `~/.seedrepo/config.toml`
//! 3. Environment variables (new names first, then legacy names)
//! 4. CLI flags, applied by the caller

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SeedError};
use crate::paths;

/// Base path variables, most specific first.
pub const BASE_PATH_VARS: &[&str] = &["SEEDREPO_BASE", "github-local-directory", "mp"];

/// Access token variables, most specific first.
pub const TOKEN_VARS: &[&str] = &["SEEDREPO_TOKEN", "github-token", "gt", "GITHUB_TOKEN"];

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_EDITOR: &str = "code";

/// What the sequencer does when a git step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPolicy {
    /// Record the failure, warn, keep going.
    #[default]
    BestEffort,
    /// Abort at the first failing step.
    Strict,
}

/// Configuration for a seedrepo run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which new projects are created
    pub base_path: PathBuf,
    /// Forge access token (only needed in remote mode)
    pub token: Option<String>,
    /// Editor command to open the project with, `None` to skip
    pub editor: Option<String>,
    /// Forge REST API root
    pub api_url: String,
    pub policy: StepPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            token: None,
            editor: Some(DEFAULT_EDITOR.to_string()),
            api_url: DEFAULT_API_URL.to_string(),
            policy: StepPolicy::default(),
        }
    }
}

/// On-disk shape of `~/.seedrepo/config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Empty string disables the editor launch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Load configuration from the user file and the process environment.
    pub fn load() -> Result<Self> {
        let file = load_file(&paths::config_path())?;
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Layer a file config and an environment lookup over the defaults.
    pub fn resolve(file: Option<FileConfig>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(file) = file {
            if let Some(base) = file.base_path {
                config.base_path = expand(&base)?;
            }
            if let Some(editor) = file.editor {
                config.editor = (!editor.trim().is_empty()).then_some(editor);
            }
            if let Some(api) = file.api_url {
                config.api_url = api;
            }
            if file.strict {
                config.policy = StepPolicy::Strict;
            }
        }

        if let Some(base) = first_set(BASE_PATH_VARS, &env) {
            config.base_path = expand(&base)?;
        }
        config.token = first_set(TOKEN_VARS, &env);

        Ok(config)
    }
}

/// Read the user config file. A missing file is not an error.
pub fn load_file(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| SeedError::io(path, e))?;
    let parsed = toml::from_str(&content)
        .map_err(|e| SeedError::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(parsed))
}

fn first_set(keys: &[&str], env: &impl Fn(&str) -> Option<String>) -> Option<String> {
    keys.iter()
        .filter_map(|&key| env(key))
        .find(|value| !value.trim().is_empty())
}

/// Expand `~` and `$VAR` in a configured path.
fn expand(raw: &str) -> Result<PathBuf> {
    shellexpand::full(raw)
        .map(|s| PathBuf::from(s.as_ref()))
        .map_err(|e| SeedError::Config(format!("cannot expand '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = Config::resolve(None, env_of(&[])).unwrap();
        assert_eq!(config.base_path, PathBuf::from("."));
        assert_eq!(config.token, None);
        assert_eq!(config.editor.as_deref(), Some("code"));
        assert_eq!(config.policy, StepPolicy::BestEffort);
    }

    #[test]
    fn test_legacy_env_names() {
        let config =
            Config::resolve(None, env_of(&[("mp", "/projects"), ("gt", "tok")])).unwrap();
        assert_eq!(config.base_path, PathBuf::from("/projects"));
        assert_eq!(config.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_specific_name_wins_over_legacy() {
        let env = env_of(&[
            ("mp", "/old"),
            ("github-local-directory", "/newer"),
            ("github-token", "a"),
            ("GITHUB_TOKEN", "b"),
        ]);
        let config = Config::resolve(None, env).unwrap();
        assert_eq!(config.base_path, PathBuf::from("/newer"));
        assert_eq!(config.token.as_deref(), Some("a"));
    }

    #[test]
    fn test_blank_token_is_unset() {
        let config = Config::resolve(None, env_of(&[("gt", "  ")])).unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileConfig {
            base_path: Some("/from-file".to_string()),
            editor: Some(String::new()),
            api_url: Some("http://localhost:9".to_string()),
            strict: true,
        };
        let config = Config::resolve(Some(file), env_of(&[("SEEDREPO_BASE", "/from-env")])).unwrap();
        assert_eq!(config.base_path, PathBuf::from("/from-env"));
        assert_eq!(config.editor, None);
        assert_eq!(config.api_url, "http://localhost:9");
        assert_eq!(config.policy, StepPolicy::Strict);
    }

    #[test]
    fn test_load_file_missing_and_present() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        assert!(load_file(&path).unwrap().is_none());

        fs::write(&path, "base_path = \"/srv/projects\"\nstrict = true\n").unwrap();
        let file = load_file(&path).unwrap().unwrap();
        assert_eq!(file.base_path.as_deref(), Some("/srv/projects"));
        assert!(file.strict);
    }

    #[test]
    fn test_load_file_rejects_bad_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "base_path = [").unwrap();
        assert!(matches!(load_file(&path), Err(SeedError::Config(_))));
    }
}
