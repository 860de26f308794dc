//! Argfile expansion for command-line parsing.
//!
//! Any token starting with `@` names a file whose lines are spliced into the
//! argument stream, one argument per line.

pub mod args;
pub mod config;
pub mod exit;
pub mod logging;
pub mod runner;
