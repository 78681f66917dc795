//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod fetcher;
pub mod workspace;

pub use fetcher::FakeFetcher;
pub use workspace::TestWorkspace;
