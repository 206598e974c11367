//! Internal implementation for project module

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SeedError};

/// Which repositories a run creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Local git repository only (`l`)
    Local,
    /// Remote repository on the forge plus the local one (`g`)
    Remote,
}

impl Mode {
    /// Parse the CLI mode flag. Anything other than `g` / `l` is not a mode.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "g" => Some(Mode::Remote),
            "l" => Some(Mode::Local),
            _ => None,
        }
    }

    pub fn wants_remote(self) -> bool {
        self == Mode::Remote
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Local => write!(f, "local"),
            Mode::Remote => write!(f, "remote"),
        }
    }
}

/// The project being scaffolded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    base_path: PathBuf,
    mode: Mode,
}

impl ProjectSpec {
    /// Validate the folder name and pin down the project.
    ///
    /// The name must be a single path component: not empty, not `.` or `..`,
    /// and free of path separators on every platform.
    pub fn new(name: impl Into<String>, base_path: impl Into<PathBuf>, mode: Mode) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
            return Err(SeedError::Config(format!("invalid project name: '{}'", name)));
        }
        let mut components = Path::new(trimmed).components();
        let single = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single || trimmed.contains(['/', '\\']) {
            return Err(SeedError::Config(format!(
                "project name must be a single folder name: '{}'",
                name
            )));
        }

        Ok(Self {
            name: trimmed.to_string(),
            base_path: base_path.into(),
            mode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Project root: `<base>/<name>`
    pub fn root(&self) -> PathBuf {
        self.base_path.join(&self.name)
    }
}

/// Log file name derived from the project name: path separators and
/// whitespace become `_`.
pub fn log_file_name(name: &str) -> String {
    let normalized: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{}.log", normalized)
}
