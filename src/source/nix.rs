//! `SourceFetcher` backed by `git ls-remote`, `nix-prefetch-url` and `nix hash to-sri`

use crate::config::FetcherConfig;
use crate::source::command::run_tool;
use crate::source::commit::{archive_url, parse_ls_remote, parse_prefetch, parse_sri, repository_url};
use crate::source::error::ResolveError;
use crate::source::fetcher::SourceFetcher;

/// Fetcher that shells out to git and nix
pub struct NixFetcher {
    config: FetcherConfig,
}

impl NixFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }
}

impl Default for NixFetcher {
    fn default() -> Self {
        Self::new(FetcherConfig::default())
    }
}

impl SourceFetcher for NixFetcher {
    fn resolve_commit(&self, owner: &str, repo: &str, rev: &str) -> Result<String, ResolveError> {
        let url = repository_url(&self.config.github_url, owner, repo);
        let stdout = run_tool(&self.config.git, &["ls-remote", url.as_str(), rev])?;
        parse_ls_remote(&stdout)
    }

    fn prefetch_archive(
        &self,
        owner: &str,
        repo: &str,
        commit: &str,
    ) -> Result<String, ResolveError> {
        let url = archive_url(&self.config.github_url, owner, repo, commit);
        let stdout = run_tool(
            &self.config.prefetch,
            &["--unpack", "--type", "sha256", url.as_str()],
        )?;
        parse_prefetch(&stdout)
    }

    fn to_sri(&self, raw_hash: &str) -> Result<String, ResolveError> {
        let stdout = run_tool(
            &self.config.nix,
            &["hash", "to-sri", "--type", "sha256", raw_hash],
        )?;
        parse_sri(&stdout)
    }
}
