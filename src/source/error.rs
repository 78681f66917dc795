use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} failed ({status}): {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("No output from {0}")]
    EmptyOutput(String),

    #[error("Invalid commit hash: {0}")]
    InvalidCommit(String),

    #[error("Invalid SRI hash: {0}")]
    InvalidHash(String),
}
