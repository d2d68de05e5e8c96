use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{ClientConfig, LogFormat, LoggingConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "trace",
            LogLevel::DEBUG => "debug",
            LogLevel::INFO => "info",
            LogLevel::WARN => "warn",
            LogLevel::ERROR => "error",
        }
    }
}

/// Resolve the logging config: CLI flag, then config file, then `info`.
pub fn resolve_logging_config(config: &ClientConfig, arg_log_level: Option<LogLevel>) -> LoggingConfig {
    let file_config = config.logging.clone().unwrap_or_default();
    let level = arg_log_level
        .map(|level| level.as_str().to_owned())
        .unwrap_or(file_config.level);
    LoggingConfig::new(level, file_config.format)
}

pub fn run(config: &ClientConfig, arg_log_level: Option<LogLevel>) {
    init_logging(&resolve_logging_config(config, arg_log_level));
}

/// Initialize tracing with the desired config. Logs go to stderr so that
/// command output on stdout stays machine readable.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_ansi(false)
                .with_writer(std::io::stderr);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true)
                .with_writer(std::io::stderr);

            let _ = registry.with(layer).try_init();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_file() {
        let config = ClientConfig {
            logging: Some(LoggingConfig::new("warn".into(), LogFormat::Json)),
            ..ClientConfig::default()
        };
        let resolved = resolve_logging_config(&config, Some(LogLevel::DEBUG));
        assert_eq!(resolved.level, "debug");
        assert_eq!(resolved.format, LogFormat::Json);

        let resolved = resolve_logging_config(&config, None);
        assert_eq!(resolved.level, "warn");
    }

    #[test]
    fn defaults_to_info_compact() {
        let resolved = resolve_logging_config(&ClientConfig::default(), None);
        assert_eq!(resolved, LoggingConfig::new("info".into(), LogFormat::Compact));
    }
}
