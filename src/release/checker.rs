//! Compare the pinned project revision with the latest upstream release

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::release::error::ReleaseError;
use crate::release::semver::parse_tag;
use crate::release::source::ReleaseSource;

/// Version file of the top-level project; only `rev` is read
#[derive(Debug, Deserialize)]
struct VersionFile {
    rev: String,
}

/// Result of comparing the pinned revision with the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseCheck {
    /// The latest release is newer than the pinned revision
    UpdateAvailable { current: String, latest: String },
    /// The pinned revision is the latest release or newer
    UpToDate { current: String, latest: String },
}

/// Reads the pinned revision (e.g., "v2.9.0") from a version file
pub fn read_pinned_rev(path: &Path) -> Result<String, ReleaseError> {
    let version_file_err = |reason: String| ReleaseError::VersionFile {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| version_file_err(e.to_string()))?;
    let version_file: VersionFile =
        serde_json::from_str(&content).map_err(|e| version_file_err(e.to_string()))?;

    Ok(version_file.rev)
}

/// Checks whether `repo` has published a release newer than `current_rev`
pub async fn check_release(
    source: &dyn ReleaseSource,
    repo: &str,
    current_rev: &str,
) -> Result<ReleaseCheck, ReleaseError> {
    let latest_tag = source.latest_release_tag(repo).await?;

    let current = parse_tag(current_rev)
        .ok_or_else(|| ReleaseError::InvalidVersion(current_rev.to_string()))?;
    let latest =
        parse_tag(&latest_tag).ok_or_else(|| ReleaseError::InvalidVersion(latest_tag.clone()))?;

    info!("{}: pinned {}, latest release {}", repo, current_rev, latest_tag);

    let current_rev = current_rev.to_string();
    if latest > current {
        Ok(ReleaseCheck::UpdateAvailable {
            current: current_rev,
            latest: latest_tag,
        })
    } else {
        Ok(ReleaseCheck::UpToDate {
            current: current_rev,
            latest: latest_tag,
        })
    }
}
