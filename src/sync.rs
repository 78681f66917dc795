//! Scan declarations, resolve their sources and write both manifests

use anyhow::Context;
use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::manifest::io::{load_resolved, write_declarations, write_resolved};
use crate::manifest::types::ResolvedManifest;
use crate::parser::traits::Parser;
use crate::scanner::scan_declarations;
use crate::source::fetcher::SourceFetcher;
use crate::source::resolver::resolve_all;

/// What a sync run did, per dependency name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Every dependency found in the declarations directory
    pub declared: Vec<String>,
    /// Copied unchanged from the previous resolved manifest
    pub reused: Vec<String>,
    /// Resolved from scratch in this run
    pub fetched: Vec<String>,
    /// Left out of the resolved manifest because resolution failed
    pub failed: Vec<String>,
}

impl SyncReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Runs a full sync
///
/// The declaration manifest is rewritten from scratch. The resolved manifest
/// is rebuilt from the declarations, reusing entries of the previous one whose
/// revision did not change, and is written even if some dependencies failed.
pub fn run_sync(
    config: &SyncConfig,
    parser: &dyn Parser,
    fetcher: &dyn SourceFetcher,
) -> anyhow::Result<SyncReport> {
    let dep_path = &config.declaration_output_path;
    let sha_path = &config.resolved_output_path;

    info!("Generating {}", dep_path.display());
    let declarations = scan_declarations(&config.declarations_dir, &config.scan, parser)?;
    write_declarations(dep_path, &declarations)
        .with_context(|| format!("Failed to write {}", dep_path.display()))?;
    info!("Generated {}", dep_path.display());

    info!("Generating {}", sha_path.display());
    let cache = load_resolved(sha_path)
        .inspect(|cache| {
            if !cache.is_empty() {
                info!("Loaded existing {}", sha_path.display());
            }
        })
        .unwrap_or_else(|e| {
            warn!("Could not load existing manifest, will regenerate all: {}", e);
            ResolvedManifest::new()
        });

    info!("Fetching commit sha and prefetching sources...");
    let resolution = resolve_all(fetcher, &declarations, &cache);

    write_resolved(sha_path, &resolution.resolved)
        .with_context(|| format!("Failed to write {}", sha_path.display()))?;
    info!("Generated {}", sha_path.display());

    let report = SyncReport {
        declared: declarations.keys().cloned().collect(),
        reused: resolution.reused,
        fetched: resolution.fetched,
        failed: resolution
            .failed
            .into_iter()
            .map(|(name, _)| name)
            .collect(),
    };

    info!(
        "Done: {} fetched, {} reused, {} failed",
        report.fetched.len(),
        report.reused.len(),
        report.failed.len()
    );
    if report.has_failures() {
        warn!("Not pinned: {}", report.failed.join(", "));
    }

    Ok(report)
}
