//! Create a new project skeleton, locally or locally plus on the forge
//!
//! Public interface here, logic in `internal.rs`.
//!
//! # Example
//!
//! ```no_run
//! use seedrepo::commands::init::{self, InitOptions};
//! use seedrepo::config::Config;
//! use seedrepo::forge;
//! use seedrepo::project::{Mode, ProjectSpec};
//!
//! let config = Config::load()?;
//! let spec = ProjectSpec::new("demo", config.base_path.clone(), Mode::Local)?;
//! let writer = forge::writer_for(&config, spec.mode().wants_remote())?;
//!
//! let summary = init::execute(
//!     &spec,
//!     &config,
//!     writer.as_ref(),
//!     &InitOptions::default(),
//!     &mut std::io::stdout(),
//! )?;
//! println!("created {}", summary.root.display());
//! # Ok::<(), seedrepo::SeedError>(())
//! ```

mod internal;

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::forge::{ForgeWriter, RemoteRepo};
use crate::pipeline::PipelineReport;
use crate::project::ProjectSpec;

/// Switches that only affect a single run
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Do not open the editor afterwards
    pub no_editor: bool,
    /// Print the plan, touch nothing
    pub dry_run: bool,
}

/// What a run produced
#[derive(Debug)]
pub struct InitSummary {
    pub root: PathBuf,
    pub remote: Option<RemoteRepo>,
    pub report: PipelineReport,
    pub dry_run: bool,
}

/// Execute the init command.
///
/// # Process
///
/// 1. **Preflight**: the project root must not exist (`AlreadyExists`),
///    checked before any remote or local mutation
/// 2. **Remote** (remote mode only): authenticate and create the repository
/// 3. **Sequencer**: create directories, write placeholders, run git steps
/// 4. **Editor**: open the project unless disabled
///
/// # Errors
///
/// Returns an error if:
/// - The project root already exists
/// - The token is missing/rejected or the remote name is taken
/// - A directory or file cannot be written
/// - A git step fails under the strict policy
///
/// The remote repository is not deleted if a later step fails.
pub fn execute(
    spec: &ProjectSpec,
    config: &Config,
    writer: &dyn ForgeWriter,
    options: &InitOptions,
    out: &mut dyn Write,
) -> Result<InitSummary> {
    internal::execute_init(spec, config, writer, options, out)
}
