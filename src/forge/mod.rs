//! Forge abstraction for remote repository creation.
//!
//! "Do X": Create the remote half of a new project on a forge platform.
//!
//! # Design
//!
//! - **ForgeWriter**: the capability trait (authenticate, create repository)
//! - **GitHubWriter**: REST implementation
//! - **NoneWriter**: local-only runs, every call fails
//!
//! # Example
//!
//! ```no_run
//! use seedrepo::forge::{writer_for, ForgeWriter};
//! use seedrepo::config::Config;
//!
//! let config = Config::load()?;
//! let writer = writer_for(&config, true)?;
//! let repo = writer.create_repo("demo")?;
//! # Ok::<(), seedrepo::SeedError>(())
//! ```

mod types;
pub mod writer;

pub mod github;
mod none;

pub use github::GitHubWriter;
pub use none::NoneWriter;
pub use types::RemoteRepo;
pub use writer::ForgeWriter;

use crate::config::Config;
use crate::error::Result;

/// Get a ForgeWriter for this run.
pub fn writer_for(config: &Config, remote: bool) -> Result<Box<dyn ForgeWriter>> {
    if remote {
        Ok(Box::new(GitHubWriter::new(
            config.api_url.clone(),
            config.token.clone(),
        )?))
    } else {
        Ok(Box::new(NoneWriter))
    }
}

/// Authenticate, then create the repository. Returns the new remote.
pub fn create_remote(writer: &dyn ForgeWriter, name: &str) -> Result<RemoteRepo> {
    let login = writer.authenticate()?;
    tracing::debug!(%login, name, "creating remote repository");
    writer.create_repo(name)
}
