//! Null forge for local-only runs.

use crate::error::{Result, SeedError};

use super::{ForgeWriter, RemoteRepo};

/// Null implementation for runs without a forge.
///
/// All operations fail with clear error messages.
pub struct NoneWriter;

impl ForgeWriter for NoneWriter {
    fn authenticate(&self) -> Result<String> {
        Err(SeedError::AuthError(
            "no forge configured - cannot authenticate".to_string(),
        ))
    }

    fn create_repo(&self, _name: &str) -> Result<RemoteRepo> {
        Err(SeedError::Config(
            "no forge configured - cannot create repository".to_string(),
        ))
    }
}
