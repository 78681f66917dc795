//! Fetcher test utilities

use std::cell::RefCell;
use std::collections::HashMap;

use dep_pin::source::{ResolveError, SourceFetcher};

/// In-memory fetcher that records every call it receives
#[derive(Default)]
pub struct FakeFetcher {
    /// "owner/repo@rev" -> commit
    commits: HashMap<String, String>,
    /// commit -> raw hash
    raw_hashes: HashMap<String, String>,
    pub ls_remote_calls: RefCell<Vec<String>>,
    pub prefetch_calls: RefCell<Vec<String>>,
    pub to_sri_calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `owner/repo@rev` resolve to `commit`
    pub fn with_commit(mut self, repository: &str, rev: &str, commit: &str) -> Self {
        self.commits
            .insert(format!("{}@{}", repository, rev), commit.to_string());
        self
    }

    /// Makes the archive of `commit` hash to `raw_hash`
    pub fn with_archive(mut self, commit: &str, raw_hash: &str) -> Self {
        self.raw_hashes
            .insert(commit.to_string(), raw_hash.to_string());
        self
    }

    pub fn remote_call_count(&self) -> usize {
        self.ls_remote_calls.borrow().len()
            + self.prefetch_calls.borrow().len()
            + self.to_sri_calls.borrow().len()
    }
}

impl SourceFetcher for FakeFetcher {
    fn resolve_commit(&self, owner: &str, repo: &str, rev: &str) -> Result<String, ResolveError> {
        let key = format!("{}/{}@{}", owner, repo, rev);
        self.ls_remote_calls.borrow_mut().push(key.clone());
        self.commits
            .get(&key)
            .cloned()
            .ok_or(ResolveError::EmptyOutput("git ls-remote".to_string()))
    }

    fn prefetch_archive(
        &self,
        _owner: &str,
        _repo: &str,
        commit: &str,
    ) -> Result<String, ResolveError> {
        self.prefetch_calls.borrow_mut().push(commit.to_string());
        self.raw_hashes
            .get(commit)
            .cloned()
            .ok_or(ResolveError::EmptyOutput("nix-prefetch-url".to_string()))
    }

    fn to_sri(&self, raw_hash: &str) -> Result<String, ResolveError> {
        self.to_sri_calls.borrow_mut().push(raw_hash.to_string());
        Ok(format!("sha256-{}=", raw_hash))
    }
}
