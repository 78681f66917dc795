//! Manifest reading and writing
//!
//! Both manifests are written as 2-space indented JSON with keys sorted at
//! every level and no trailing newline.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::manifest::types::{ResolvedManifest, ResolvedSource};
use crate::scanner::Declarations;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Writes the declaration manifest in full
pub fn write_declarations(path: &Path, declarations: &Declarations) -> Result<(), ManifestError> {
    let sorted: BTreeMap<&str, _> = declarations
        .iter()
        .map(|(name, declaration)| (name.as_str(), declaration))
        .collect();
    write_sorted_json(path, &sorted)
}

/// Writes the resolved manifest
pub fn write_resolved(path: &Path, resolved: &ResolvedManifest) -> Result<(), ManifestError> {
    write_sorted_json(path, resolved)
}

/// Loads a previously written resolved manifest
///
/// A missing file is an empty manifest. Entries that are not complete records
/// are dropped with a warning so that only those dependencies get recomputed.
pub fn load_resolved(path: &Path) -> Result<ResolvedManifest, ManifestError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ResolvedManifest::new()),
        Err(source) => {
            return Err(ManifestError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let entries: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(&content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let manifest = entries
        .into_iter()
        .filter_map(|(name, value)| {
            serde_json::from_value::<ResolvedSource>(value)
                .inspect_err(|e| warn!("Ignoring cached entry {}: {}", name, e))
                .ok()
                .map(|source| (name, source))
        })
        .collect();

    Ok(manifest)
}

fn write_sorted_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), ManifestError> {
    let json_err = |source: serde_json::Error| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    };

    // serde_json::Value keeps object keys in a BTreeMap, so nested records come out sorted too
    let value = serde_json::to_value(data).map_err(json_err)?;
    let text = serde_json::to_string_pretty(&value).map_err(json_err)?;

    fs::write(path, text).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}
