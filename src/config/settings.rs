use serde::Deserialize;
use std::time::Duration;

use crate::utils::constants::{API_SERVER, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_MS};

/// ================================
/// Client configuration
/// ================================
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// applies to the token exchange and to every API request
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// sent as the Origin header of token requests
    pub origin: Option<String>,
    #[serde(default = "default_language")]
    pub default_language: String,
    pub logging: Option<LoggingConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
            origin: None,
            default_language: default_language(),
            logging: None,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::Compact }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}

fn default_api_url() -> String {
    API_SERVER.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
