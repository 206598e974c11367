//! Internal implementation for GitHubWriter.
//!
//! Contains REST calls and JSON parsing.
//! Not exposed in public interface.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Result, SeedError};
use crate::forge::RemoteRepo;

// ============================================================================
// GitHub JSON types (internal, match API output format)
// ============================================================================

#[derive(Debug, Deserialize)]
struct GhUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GhRepo {
    name: String,
    #[serde(default)]
    clone_url: Option<String>,
    owner: GhUser,
}

#[derive(Debug, Default, Deserialize)]
struct GhError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<GhFieldError>,
}

#[derive(Debug, Deserialize)]
struct GhFieldError {
    #[serde(default)]
    message: Option<String>,
}

impl GhError {
    fn mentions(&self, needle: &str) -> bool {
        self.message.contains(needle)
            || self
                .errors
                .iter()
                .filter_map(|e| e.message.as_deref())
                .any(|m| m.contains(needle))
    }

    fn summary(&self) -> String {
        let details: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();
        if details.is_empty() {
            self.message.clone()
        } else {
            format!("{} ({})", self.message, details.join("; "))
        }
    }
}

// ============================================================================
// Calls (used by GitHubWriter)
// ============================================================================

fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
    request
        .bearer_auth(token)
        .header("Accept", "application/vnd.github+json")
        .header("X-GitHub-Api-Version", "2022-11-28")
}

/// Read the error body of a failed response and classify it.
fn classify_failure(response: Response, repo_name: Option<&str>) -> SeedError {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    let error: GhError = serde_json::from_str(&body).unwrap_or_default();
    tracing::debug!(%status, body = %body, "forge request failed");

    match status {
        StatusCode::UNAUTHORIZED => SeedError::AuthError(format!(
            "token rejected by forge: {}",
            error.summary()
        )),
        StatusCode::FORBIDDEN => SeedError::AuthError(format!(
            "token lacks permission: {}",
            error.summary()
        )),
        StatusCode::UNPROCESSABLE_ENTITY if error.mentions("already exists") => {
            SeedError::RemoteConflict {
                name: repo_name.unwrap_or_default().to_string(),
            }
        }
        _ => SeedError::Forge {
            status: status.as_u16(),
            message: if error.message.is_empty() {
                body
            } else {
                error.summary()
            },
        },
    }
}

/// `GET /user`: login of the token's owner.
pub(crate) fn fetch_login(http: &Client, api_url: &str, token: &str) -> Result<String> {
    let url = format!("{}/user", api_url);
    let response = authorized(http.get(&url), token).send()?;

    if !response.status().is_success() {
        return Err(classify_failure(response, None));
    }

    let user: GhUser = response.json()?;
    tracing::info!(login = %user.login, "authenticated with forge");
    Ok(user.login)
}

/// `POST /user/repos`: create a repository for the token's owner.
pub(crate) fn create_user_repo(
    http: &Client,
    api_url: &str,
    token: &str,
    name: &str,
) -> Result<RemoteRepo> {
    let url = format!("{}/user/repos", api_url);
    let body = serde_json::json!({ "name": name });
    let response = authorized(http.post(&url), token).json(&body).send()?;

    if !response.status().is_success() {
        return Err(classify_failure(response, Some(name)));
    }

    let repo: GhRepo = response.json()?;
    let clone_url = repo
        .clone_url
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| RemoteRepo::github_clone_url(&repo.owner.login, &repo.name));

    tracing::info!(repo = %repo.name, %clone_url, "created remote repository");
    Ok(RemoteRepo {
        owner_login: repo.owner.login,
        name: repo.name,
        clone_url,
    })
}
