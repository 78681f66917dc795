//! Resolved manifest records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resolved manifest contents, keyed by dependency name
pub type ResolvedManifest = BTreeMap<String, ResolvedSource>;

/// Pinned source of a single dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSource {
    /// 40 character commit hash the revision pointed to
    pub commit: String,
    /// SRI hash of the unpacked archive (e.g., "sha256-...")
    pub hash: String,
    /// Revision as declared; a cached record is reused only while this matches
    pub rev: String,
    /// Fields written by other tools, carried through unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ResolvedSource {
    pub fn new(rev: impl Into<String>, commit: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            hash: hash.into(),
            rev: rev.into(),
            extra: BTreeMap::new(),
        }
    }
}
