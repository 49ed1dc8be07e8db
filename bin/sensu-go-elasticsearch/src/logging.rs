//! Logging.
//!
//! Sensu captures a handler's standard output and standard error into the backend log, so everything is written to
//! standard error and standard output is left untouched.

use sensu_error::{generic_error, ErrorContext as _, GenericError};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const LOG_LEVEL_ENV_VAR: &str = "SENSU_ES_LOG_LEVEL";
const LOG_FORMAT_JSON_ENV_VAR: &str = "SENSU_ES_LOG_FORMAT_JSON";

/// Logging configuration.
///
/// Read from `SENSU_ES_LOG_LEVEL`, which takes `EnvFilter` directives and defaults to `info`, and
/// `SENSU_ES_LOG_FORMAT_JSON`, which switches the output to JSON when set to `true` or `1`.
pub struct LoggingConfiguration {
    /// Verbosity filter applied to all events.
    log_level: LogLevel,

    /// Whether to emit JSON instead of compact text.
    log_format_json: bool,
}

impl LoggingConfiguration {
    /// Creates a new `LoggingConfiguration` from the process environment.
    ///
    /// # Errors
    ///
    /// If the log level is set but cannot be parsed, an error is returned.
    pub fn from_env() -> Result<Self, GenericError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, GenericError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_ENV_VAR) {
            Some(value) => LogLevel::try_from(value)
                .with_error_context(|| format!("Invalid value for {}.", LOG_LEVEL_ENV_VAR))?,
            None => LevelFilter::INFO.into(),
        };
        let log_format_json = lookup(LOG_FORMAT_JSON_ENV_VAR)
            .map(|value| value.eq_ignore_ascii_case("true") || value == "1")
            .unwrap_or(false);

        Ok(Self {
            log_level,
            log_format_json,
        })
    }
}

struct LogLevel(EnvFilter);

impl From<LevelFilter> for LogLevel {
    fn from(level: LevelFilter) -> Self {
        Self(EnvFilter::default().add_directive(level.into()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = GenericError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(generic_error!("Log level cannot be empty."));
        }

        EnvFilter::builder()
            .parse(value)
            .map(Self)
            .error_context("Failed to parse valid log level.")
    }
}

/// Initializes the global `tracing` subscriber.
///
/// # Errors
///
/// If a global subscriber was already installed, an error is returned.
pub fn initialize_logging(config: LoggingConfiguration) -> Result<(), GenericError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.log_level.0)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if config.log_format_json {
        builder.json().try_init()
    } else {
        builder.compact().with_ansi(false).try_init()
    };

    result.map_err(|e| generic_error!("Failed to initialize logging: {}", e))
}
