//! Upstream release tracking
//!
//! Compares the revision the top-level project is pinned to against the
//! latest release published on GitHub.
//!
//! # Modules
//!
//! - [`source`]: Trait for looking up the latest release of a repository
//! - [`github`]: GitHub Releases API implementation
//! - [`checker`]: Version file loading and comparison
//! - [`semver`]: Tag parsing
//! - [`error`]: Error type for release lookups

pub mod checker;
pub mod error;
pub mod github;
pub mod semver;
pub mod source;

pub use checker::{ReleaseCheck, check_release, read_pinned_rev};
pub use error::ReleaseError;
pub use github::GitHubReleases;
pub use source::ReleaseSource;
