//! Trait over the external tools that pin a source

#[cfg(test)]
use mockall::automock;

use crate::source::error::ResolveError;

/// Resolves revisions and hashes archives for GitHub-hosted sources
#[cfg_attr(test, automock)]
pub trait SourceFetcher {
    /// Resolves `rev` (branch or tag) of `owner/repo` to a commit hash
    fn resolve_commit(&self, owner: &str, repo: &str, rev: &str) -> Result<String, ResolveError>;

    /// Downloads and unpacks the archive of `commit`, returning its raw sha256 hash
    fn prefetch_archive(
        &self,
        owner: &str,
        repo: &str,
        commit: &str,
    ) -> Result<String, ResolveError>;

    /// Converts a raw sha256 hash to SRI form (`sha256-<base64>`)
    fn to_sri(&self, raw_hash: &str) -> Result<String, ResolveError>;
}
