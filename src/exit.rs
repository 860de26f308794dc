//! Exit status handling.

use std::process::ExitStatus;

use crate::args::ParseError;

/// Generic failure.
pub const FAILURE: u8 = 1;
/// The command line could not be parsed or expanded.
pub const USAGE_ERROR: u8 = 2;

/// Exit code for a top-level failure.
///
/// A [`ParseError`] anywhere in the chain is a usage error; anything else is
/// a generic failure.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.chain().any(|cause| cause.is::<ParseError>()) {
        USAGE_ERROR
    } else {
        FAILURE
    }
}

/// Exit code that mirrors a finished child process.
///
/// On Unix a child killed by a signal maps to `128 + signal`.
pub fn child_exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(FAILURE);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(FAILURE);
        }
    }

    FAILURE
}

/// Print a failure to stderr and record it in the log.
pub fn report(err: &anyhow::Error) {
    tracing::error!(error = %format!("{err:#}"), "argexpand failed");
    eprintln!("Error: {err:#}");
}
