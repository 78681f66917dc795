//! Trait for looking up the latest release of a repository

#[cfg(test)]
use mockall::automock;

use crate::release::error::ReleaseError;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the tag of the latest published release
    ///
    /// # Arguments
    /// * `repo` - Repository in `owner/name` form (e.g., "apache/kvrocks")
    async fn latest_release_tag(&self, repo: &str) -> Result<String, ReleaseError>;
}
