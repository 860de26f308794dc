use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML in config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: argfile prefix {prefix:?} {reason}")]
    InvalidPrefix { prefix: char, reason: &'static str },
}

impl Config {
    /// `<config_dir>/argexpand/config.toml`, relative to the working
    /// directory when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_default()
            .join("argexpand")
            .join("config.toml")
    }

    /// The user's config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::load_from(&Self::config_path()) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            loaded => loaded,
        }
    }

    /// Read, deserialize and validate the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.into(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.into(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The prefix must not start an option and must survive shell splitting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = self.argfile.prefix;
        let reason = match prefix {
            '-' => "conflicts with option syntax",
            c if c.is_whitespace() => "must not be whitespace",
            _ => return Ok(()),
        };
        Err(ConfigError::InvalidPrefix { prefix, reason })
    }
}
