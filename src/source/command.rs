//! External tool execution

use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::ToolCommand;
use crate::source::error::ResolveError;

/// Runs `tool` with `args` appended to its leading arguments and returns its stdout
///
/// Blocks until the process exits. A non-zero exit status is an error carrying
/// the trimmed stderr.
pub fn run_tool(tool: &ToolCommand, args: &[&str]) -> Result<String, ResolveError> {
    debug!(
        "Running {} {} {}",
        tool.program,
        tool.leading_args.join(" "),
        args.join(" ")
    );

    let output = Command::new(&tool.program)
        .args(&tool.leading_args)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ResolveError::Spawn {
            program: tool.program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ResolveError::CommandFailed {
            program: tool.program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
