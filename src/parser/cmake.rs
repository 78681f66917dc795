//! CMake declaration parser
//!
//! Extracts the GitHub coordinates of a dependency declared through one of the
//! mirror-aware FetchContent helper macros.
//!
//! Format examples:
//! - Archive: `FetchContent_DeclareGitHubWithMirror(jemalloc jemalloc/jemalloc 5.3.0 MD5=...)`
//! - Tarball:
//!   ```text
//!   FetchContent_DeclareGitHubTarWithMirror(lua
//!     RocksLabs/lua 1ab4ea5f...
//!     MD5=...
//!   )
//!   ```

use regex::Regex;

use crate::parser::traits::Parser;
use crate::parser::types::{Declaration, DeclarationMacro, ParsedDeclaration};

/// Parser for CMake dependency declaration files
pub struct CMakeParser {
    /// One pattern per macro, in priority order.
    /// Captures: registration key, owner, repo, revision
    patterns: Vec<(DeclarationMacro, Regex)>,
}

impl CMakeParser {
    pub fn new() -> Self {
        let patterns = DeclarationMacro::PRIORITY
            .into_iter()
            .map(|declaration_macro| {
                // Match: MACRO( KEY owner/repo rev
                let pattern = format!(
                    r"{}\s*\(\s*(\S+)\s+([\w.-]+)/([\w.-]+)\s+([\w.-]+)",
                    regex::escape(declaration_macro.as_str())
                );
                (declaration_macro, Regex::new(&pattern).unwrap())
            })
            .collect();

        Self { patterns }
    }
}

impl Default for CMakeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for CMakeParser {
    fn parse(&self, content: &str) -> Option<ParsedDeclaration> {
        self.patterns.iter().find_map(|(declaration_macro, re)| {
            let caps = re.captures(content)?;
            Some(ParsedDeclaration {
                key: caps[1].to_string(),
                declaration_macro: *declaration_macro,
                declaration: Declaration {
                    owner: caps[2].to_string(),
                    repo: caps[3].to_string(),
                    rev: caps[4].to_string(),
                },
            })
        })
    }
}
