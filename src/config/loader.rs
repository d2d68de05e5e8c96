use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::settings::ClientConfig;

const ALLOWED_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load config from an optional YAML file. No path means defaults.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config '{}'", path.display()))?;
            parse_config(&expand_env_vars(&content))
        }
        None => Ok(ClientConfig::default()),
    }
}

pub fn parse_config(content: &str) -> Result<ClientConfig> {
    let config: ClientConfig = if content.trim().is_empty() {
        ClientConfig::default()
    } else {
        serde_yaml::from_str(content).inspect_err(|e| error!("parse config error: {}", e))?
    };

    debug!("validation config ...");
    validate_config(&config).map_err(|errors| anyhow!("invalid config: {}", errors.join("; ")))?;
    Ok(config)
}

/// Returns every issue found, not only the first one.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    match url::Url::parse(&config.api_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!("api_url: unsupported scheme '{}'", url.scheme())),
        Err(e) => errors.push(format!("api_url: '{}' is not a valid URL: {}", config.api_url, e)),
    }

    if config.timeout_ms == 0 {
        errors.push("timeout_ms: must be greater than 0".to_string());
    }

    if config.default_language.trim().is_empty() {
        errors.push("default_language: must not be blank".to_string());
    }

    if let Some(origin) = &config.origin {
        if origin.trim().is_empty() {
            errors.push("origin: must not be blank when set".to_string());
        }
    }

    if let Some(logging) = &config.logging {
        if !ALLOWED_LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!("logging.level: '{}' is not one of {:?}", logging.level, ALLOWED_LOG_LEVELS));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Replace `${VAR}` and `${VAR:default}` with environment values.
fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static regex");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::LogFormat;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, "https://maps-api.apple.com");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.default_language, "en-US");
    }

    #[test]
    #[serial]
    fn file_with_env_expansion() {
        std::env::set_var("MAPS_TEST_ORIGIN", "https://maps.example.com");
        std::env::remove_var("MAPS_TEST_TIMEOUT");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_url: http://127.0.0.1:8080\ntimeout_ms: ${{MAPS_TEST_TIMEOUT:2500}}\norigin: ${{MAPS_TEST_ORIGIN}}\nlogging:\n  level: debug\n  format: json"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.origin.as_deref(), Some("https://maps.example.com"));
        assert_eq!(config.default_language, "en-US");
        let logging = config.logging.unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);

        std::env::remove_var("MAPS_TEST_ORIGIN");
    }

    #[test]
    fn validation_aggregates_errors() {
        let err = parse_config("api_url: ftp://example.com\ntimeout_ms: 0\nlogging:\n  level: loud").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("api_url"));
        assert!(message.contains("timeout_ms"));
        assert!(message.contains("logging.level"));
    }

    #[test]
    fn missing_file_is_error() {
        assert!(load_config(Some(Path::new("/definitely/not/here.yaml"))).is_err());
    }
}
