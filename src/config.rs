use std::path::{Path, PathBuf};

// =============================================================================
// Layout constants
// =============================================================================

/// Extension of the CMake files that carry dependency declarations
pub const DECLARATION_EXTENSION: &str = ".cmake";

/// Declaration files that are never scanned, regardless of content
pub const IGNORED_DECLARATION_FILES: &[&str] = &["riscv64.cmake"];

/// Directory holding the declaration files, relative to the root
pub const DEFAULT_DECLARATIONS_DIR: &str = "kvrocks/cmake";

/// Declaration manifest file name, relative to the root
pub const DEFAULT_DECLARATION_OUTPUT: &str = "dep.json";

/// Resolved manifest file name, relative to the root
pub const DEFAULT_RESOLVED_OUTPUT: &str = "sha.json";

/// Version file of the top-level project, relative to the root
pub const DEFAULT_VERSION_FILE: &str = "ver.json";

// =============================================================================
// Remote endpoints
// =============================================================================

/// Base URL that repositories and archives are fetched from
pub const DEFAULT_GITHUB_URL: &str = "https://github.com";

/// Base URL of the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Upstream project whose releases are tracked by `check-release`
pub const DEFAULT_RELEASE_REPO: &str = "apache/kvrocks";

// =============================================================================
// External tools
// =============================================================================

pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const DEFAULT_PREFETCH_PROGRAM: &str = "nix-prefetch-url";
pub const DEFAULT_NIX_PROGRAM: &str = "nix";

/// Paths consumed and produced by a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub declarations_dir: PathBuf,
    pub declaration_output_path: PathBuf,
    pub resolved_output_path: PathBuf,
    pub scan: ScanConfig,
}

impl SyncConfig {
    /// Builds the default layout below `root`:
    /// `<root>/kvrocks/cmake`, `<root>/dep.json` and `<root>/sha.json`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            declarations_dir: root.join(DEFAULT_DECLARATIONS_DIR),
            declaration_output_path: root.join(DEFAULT_DECLARATION_OUTPUT),
            resolved_output_path: root.join(DEFAULT_RESOLVED_OUTPUT),
            scan: ScanConfig::default(),
        }
    }
}

/// Which directory entries the scanner looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub extension: String,
    pub ignored_files: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DECLARATION_EXTENSION.to_string(),
            ignored_files: IGNORED_DECLARATION_FILES
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    /// Returns true if a directory entry with this name should be parsed
    pub fn accepts(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension) && !self.ignored_files.iter().any(|f| f == file_name)
    }
}

/// A program plus the arguments placed before the per-call arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub leading_args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// External tools and the forge used to resolve sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub github_url: String,
    pub git: ToolCommand,
    pub prefetch: ToolCommand,
    pub nix: ToolCommand,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            github_url: DEFAULT_GITHUB_URL.to_string(),
            git: ToolCommand::new(DEFAULT_GIT_PROGRAM),
            prefetch: ToolCommand::new(DEFAULT_PREFETCH_PROGRAM),
            nix: ToolCommand::new(DEFAULT_NIX_PROGRAM),
        }
    }
}
