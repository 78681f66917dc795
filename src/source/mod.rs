//! Source resolution layer
//!
//! Turns a declared revision into a pinned source: the commit it points to and
//! the SRI hash of the unpacked archive for that commit.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │  Resolver   │────▶│ SourceFetcher │────▶│    NixFetcher    │
//! │ (cache hit, │     │    (trait)    │     │ git ls-remote,   │
//! │  per item)  │     └───────────────┘     │ nix-prefetch-url │
//! └─────────────┘                           │ nix hash to-sri  │
//!                                           └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: Cache reuse and per-dependency resolution
//! - [`fetcher`]: Trait over the external tools
//! - [`nix`]: `SourceFetcher` backed by git and nix
//! - [`command`]: Running an external tool and capturing its output
//! - [`commit`]: Commit hash detection and tool output parsing
//! - [`error`]: Error type for a single resolution

pub mod command;
pub mod commit;
pub mod error;
pub mod fetcher;
pub mod nix;
pub mod resolver;

pub use error::ResolveError;
pub use fetcher::SourceFetcher;
pub use nix::NixFetcher;
pub use resolver::{Resolution, resolve_all, resolve_source};
