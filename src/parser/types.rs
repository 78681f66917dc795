//! Common types for parsers

use serde::{Deserialize, Serialize};

/// CMake helper macro a dependency is declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationMacro {
    /// `FetchContent_DeclareGitHubWithMirror(KEY owner/repo rev ...)`
    GitHubWithMirror,
    /// `FetchContent_DeclareGitHubTarWithMirror(KEY owner/repo rev ...)`
    GitHubTarWithMirror,
}

impl DeclarationMacro {
    /// All macros, in the order they are tried
    pub const PRIORITY: [DeclarationMacro; 2] = [
        DeclarationMacro::GitHubWithMirror,
        DeclarationMacro::GitHubTarWithMirror,
    ];

    /// Returns the macro name as it appears in CMake files
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationMacro::GitHubWithMirror => "FetchContent_DeclareGitHubWithMirror",
            DeclarationMacro::GitHubTarWithMirror => "FetchContent_DeclareGitHubTarWithMirror",
        }
    }
}

/// Upstream coordinates of a dependency, as written to the declaration manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// GitHub owner (e.g., "jemalloc")
    pub owner: String,
    /// GitHub repository name (e.g., "jemalloc")
    pub repo: String,
    /// Branch, tag, or full commit hash
    pub rev: String,
}

/// A declaration extracted from a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDeclaration {
    /// First macro argument (e.g., "jemalloc"). Not used as the dependency name;
    /// the scanner names dependencies after their file.
    pub key: String,
    /// Which macro matched
    pub declaration_macro: DeclarationMacro,
    pub declaration: Declaration,
}
