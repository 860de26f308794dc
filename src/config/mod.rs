//! Configuration loading.
//!
//! Configuration lives in `<config_dir>/argexpand/config.toml`; every key is
//! optional and a missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ArgfileConfig, Config, LoggingConfig};
