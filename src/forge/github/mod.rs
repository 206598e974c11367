//! GitHub ForgeWriter implementation.
//!
//! "Do X": Create repositories on GitHub.
//!
//! Talks to the REST API with a blocking client and a bearer token.
//! All HTTP interaction hidden in internal.rs.

mod internal;

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{Result, SeedError};

use super::{ForgeWriter, RemoteRepo};

const USER_AGENT: &str = concat!("seedrepo/", env!("CARGO_PKG_VERSION"));

/// GitHub implementation of ForgeWriter.
pub struct GitHubWriter {
    api_url: String,
    token: Option<String>,
    http: Client,
}

impl GitHubWriter {
    /// Create a writer for the given API root (normally `https://api.github.com`).
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                SeedError::AuthError(
                    "no access token configured (set SEEDREPO_TOKEN or github-token)".to_string(),
                )
            })
    }
}

impl ForgeWriter for GitHubWriter {
    fn authenticate(&self) -> Result<String> {
        let token = self.token()?;
        internal::fetch_login(&self.http, &self.api_url, token)
    }

    fn create_repo(&self, name: &str) -> Result<RemoteRepo> {
        let token = self.token()?;
        internal::create_user_repo(&self.http, &self.api_url, token, name)
    }
}
