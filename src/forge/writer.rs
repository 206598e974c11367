//! Forge write operations for repository management.
//!
//! "Do X": Create repositories on a forge platform.
//!
//! The pipeline only ever needs two capabilities from a forge: find out who
//! the token belongs to, and create a repository under that account. Keeping
//! the trait this small lets tests swap in an in-memory fake.
//!
//! # Example
//!
//! ```no_run
//! use seedrepo::forge::{ForgeWriter, GitHubWriter};
//!
//! let writer = GitHubWriter::new("https://api.github.com", Some("ghp_...".into()))?;
//! let login = writer.authenticate()?;
//! let repo = writer.create_repo("demo")?;
//! println!("{} created {}", login, repo.clone_url);
//! # Ok::<(), seedrepo::SeedError>(())
//! ```

use crate::error::Result;

use super::RemoteRepo;

/// Write operations on a forge platform.
pub trait ForgeWriter {
    /// Verify the credentials and return the authenticated login.
    ///
    /// Fails with `AuthError` when the token is missing or rejected.
    fn authenticate(&self) -> Result<String>;

    /// Create a repository named `name` in the authenticated account.
    ///
    /// Fails with `RemoteConflict` when the name is already taken.
    fn create_repo(&self, name: &str) -> Result<RemoteRepo>;
}
