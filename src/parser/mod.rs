//! Parser layer
//! - traits.rs: Parser trait definition
//! - types.rs: Common types (Declaration, ParsedDeclaration, DeclarationMacro)
//! - cmake.rs: CMake FetchContent declaration parser

pub mod cmake;
pub mod traits;
pub mod types;

pub use cmake::CMakeParser;
pub use traits::Parser;
pub use types::{Declaration, DeclarationMacro, ParsedDeclaration};
