//! Errors raised while parsing a command line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a parse pass.
///
/// A parse never produces a partial result: the first error stops the pass
/// and the target is left in whatever state the handlers reached.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An `@file` reference could not be read.
    #[error("Failed to read argfile '{path}': {source}")]
    Argfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The option needs a value but the command line ended.
    #[error("Option '{option}' takes an operand")]
    MissingOperand { option: String },

    /// The value could not be converted to the option's type.
    #[error("\"{value}\" is not a valid value for '{option}': {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },

    /// A `-`-prefixed token that matches no registered option.
    #[error("\"{0}\" is not a valid option")]
    UnknownOption(String),

    /// A positional token with no argument left to receive it.
    #[error("Too many arguments: \"{0}\"")]
    TooManyArguments(String),

    /// A required option or argument received no value.
    #[error("Option '{0}' is required")]
    MissingRequired(String),
}
