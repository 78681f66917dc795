//! Manifest files
//!
//! - types.rs: Records stored in the resolved manifest
//! - io.rs: Reading the resolved manifest back as a cache, writing sorted JSON

pub mod io;
pub mod types;

pub use io::{ManifestError, load_resolved, write_declarations, write_resolved};
pub use types::{ResolvedManifest, ResolvedSource};
