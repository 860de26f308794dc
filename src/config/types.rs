use serde::Deserialize;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub argfile: ArgfileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Argfile expansion settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArgfileConfig {
    /// Expand `@path` tokens (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sentinel character marking an argfile reference (default: '@').
    #[serde(default = "default_prefix")]
    pub prefix: char,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_enabled() -> bool {
    true
}

fn default_prefix() -> char {
    '@'
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ArgfileConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            prefix: default_prefix(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
