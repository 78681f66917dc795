//! Declaration scanner
//!
//! Walks a directory of declaration files and collects the dependency each one
//! declares, keyed by the file's stem.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::parser::traits::Parser;
use crate::parser::types::Declaration;

/// Declarations in scan order (file names sorted lexicographically)
pub type Declarations = IndexMap<String, Declaration>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read declarations directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Scans `dir` for declaration files and extracts one declaration per file
///
/// Files rejected by `config`, and files without a recognized
/// declaration, are skipped silently.
pub fn scan_declarations(
    dir: &Path,
    config: &ScanConfig,
    parser: &dyn Parser,
) -> Result<Declarations, ScanError> {
    info!("Scanning {}...", dir.display());

    let read_dir_err = |source: std::io::Error| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut file_names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let Ok(file_name) = entry.file_name().into_string() else {
            debug!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        if config.accepts(&file_name) {
            file_names.push(file_name);
        }
    }
    file_names.sort();

    let mut declarations = Declarations::new();
    for file_name in file_names {
        let path = dir.join(&file_name);

        // fs::metadata follows symlinks
        let metadata = fs::metadata(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_file() {
            debug!("Skipping {}: not a regular file", path.display());
            continue;
        }

        let bytes = fs::read(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let Some(parsed) = parser.parse(&content) else {
            continue;
        };

        let Some(name) = dependency_name(&path) else {
            continue;
        };
        info!("  -> Found {}", name);
        declarations.insert(name, parsed.declaration);
    }

    Ok(declarations)
}

/// Name of the dependency declared in `path`: the file name without its extension
fn dependency_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
