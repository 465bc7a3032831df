//! Process configuration, read from the environment.

use stockroom_observability::{LogConfig, LogFormat};

/// Selects the log line format (`text` or `json`).
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub log: LogConfig,
    /// Raw `STOCKROOM_LOG_FORMAT` value that could not be parsed, kept so it
    /// can be reported once logging is up.
    pub unrecognized_log_format: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.log.format = format,
                None => config.unrecognized_log_format = Some(raw),
            }
        }

        config
    }
}
