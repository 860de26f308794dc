//! Runs an expanded invocation as a child process.

use std::process::{Command, ExitStatus};

use anyhow::Context;

use crate::args::Invocation;

/// Spawn `invocation` with inherited stdio and wait for it to finish.
pub fn run(invocation: &Invocation) -> anyhow::Result<ExitStatus> {
    tracing::debug!(command = %invocation.command, args = ?invocation.args, "spawning");

    let status = Command::new(&invocation.command)
        .args(&invocation.args)
        .status()
        .with_context(|| format!("Failed to run '{}'", invocation.command))?;

    tracing::debug!(?status, "child exited");
    Ok(status)
}
