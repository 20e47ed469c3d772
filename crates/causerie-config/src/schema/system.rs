//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level, scoped to our crates.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "causerie=debug,causerie_ai=debug,causerie_config=debug",
            LogLevel::Info => "causerie=info,causerie_ai=info,causerie_config=info",
            LogLevel::Warning => "causerie=warn,causerie_ai=warn,causerie_config=warn",
            LogLevel::Error => "causerie=error,causerie_ai=error,causerie_config=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
