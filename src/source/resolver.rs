//! Hash resolution with cache reuse
//!
//! Each declared dependency is either copied from the previous resolved
//! manifest (when its revision is unchanged) or resolved from scratch. A
//! failure only affects the dependency it happened on.

use tracing::{error, info};

use crate::manifest::types::{ResolvedManifest, ResolvedSource};
use crate::parser::types::Declaration;
use crate::scanner::Declarations;
use crate::source::commit::is_commit_hash;
use crate::source::error::ResolveError;
use crate::source::fetcher::SourceFetcher;

/// Outcome of resolving a set of declarations
#[derive(Debug, Default)]
pub struct Resolution {
    /// Records to persist: reused and freshly fetched ones
    pub resolved: ResolvedManifest,
    /// Names copied from the cache, in declaration order
    pub reused: Vec<String>,
    /// Names resolved from scratch, in declaration order
    pub fetched: Vec<String>,
    /// Names that could not be resolved, with the reason
    pub failed: Vec<(String, ResolveError)>,
}

/// Resolves one declaration to a pinned source
///
/// 1. A revision that is already a full commit hash is used as is; anything
///    else is resolved remotely.
/// 2. The archive for the commit is prefetched and its hash converted to SRI.
pub fn resolve_source(
    fetcher: &dyn SourceFetcher,
    name: &str,
    declaration: &Declaration,
) -> Result<ResolvedSource, ResolveError> {
    let Declaration { owner, repo, rev } = declaration;

    let commit = if is_commit_hash(rev) {
        rev.clone()
    } else {
        info!("-> Resolving {} {}/{} @ {}...", name, owner, repo, rev);
        fetcher.resolve_commit(owner, repo, rev)?
    };

    info!(
        "-> Fetching {} : {}/{} {}...",
        name,
        owner,
        repo,
        &commit[..7.min(commit.len())]
    );
    let raw_hash = fetcher.prefetch_archive(owner, repo, &commit)?;
    let hash = fetcher.to_sri(&raw_hash)?;

    Ok(ResolvedSource::new(rev.clone(), commit, hash))
}

/// Resolves every declaration, reusing cached records whose revision is unchanged
///
/// Declarations are processed one at a time in order. Failures are logged and
/// collected; they never stop the remaining declarations.
pub fn resolve_all(
    fetcher: &dyn SourceFetcher,
    declarations: &Declarations,
    cache: &ResolvedManifest,
) -> Resolution {
    let mut resolution = Resolution::default();

    for (name, declaration) in declarations {
        if let Some(cached) = cache.get(name).filter(|c| c.rev == declaration.rev) {
            info!("-> Reusing cached {} @ {}", name, declaration.rev);
            resolution.resolved.insert(name.clone(), cached.clone());
            resolution.reused.push(name.clone());
            continue;
        }

        match resolve_source(fetcher, name, declaration) {
            Ok(source) => {
                resolution.resolved.insert(name.clone(), source);
                resolution.fetched.push(name.clone());
            }
            Err(e) => {
                error!("Failed to resolve {}: {}", name, e);
                resolution.failed.push((name.clone(), e));
            }
        }
    }

    resolution
}
