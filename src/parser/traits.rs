//! Parser trait definition

use crate::parser::types::ParsedDeclaration;

/// Trait for parsing dependency declaration files
///
/// Which files are handed to a parser is decided by the scanner's `ScanConfig`.
pub trait Parser {
    /// Extract the dependency declared in `content`, if any
    fn parse(&self, content: &str) -> Option<ParsedDeclaration>;
}
