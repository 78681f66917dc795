//! GitHub Releases API implementation

use serde::Deserialize;
use tracing::warn;

use crate::config::DEFAULT_GITHUB_API_URL;
use crate::release::error::ReleaseError;
use crate::release::source::ReleaseSource;

/// Response from the latest release endpoint
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Looks up releases through the GitHub REST API
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubReleases {
    /// Creates a new GitHubReleases with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("dep-pin")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GitHubReleases {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_API_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn latest_release_tag(&self, repo: &str) -> Result<String, ReleaseError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, repo);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ReleaseError::NotFound(repo.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(ReleaseError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(ReleaseError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let release: Release = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub release response: {}", e);
            ReleaseError::InvalidResponse(e.to_string())
        })?;

        Ok(release.tag_name)
    }
}
