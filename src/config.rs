//! Configuration for the checker.
//!
//! Settings are read once at process start from `EULERBRICK_*` environment
//! variables. Anything unset keeps its default.

use crate::error::ConfigError;

/// Selects log output format
pub const ENV_LOG_FORMAT: &str = "EULERBRICK_LOG_FORMAT";
/// Rejects triples containing zero or negative values when set
pub const ENV_STRICT_POSITIVE: &str = "EULERBRICK_STRICT_POSITIVE";
/// Runs the self-test before the interactive session when set
pub const ENV_SELF_TEST_ON_START: &str = "EULERBRICK_SELF_TEST_ON_START";
/// Shows a progress bar while batches are checked
pub const ENV_PROGRESS: &str = "EULERBRICK_PROGRESS";

/// How log lines are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Master configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log output format.
    pub log_format: LogFormat,
    /// Reject triples with zero or negative values before checking.
    ///
    /// Off by default, which keeps `(0, 0, 0)` and friends acceptable input.
    pub strict_positive: bool,
    /// Run the built-in scenarios before the session starts.
    pub self_test_on_start: bool,
    /// Draw a progress bar for batch checks.
    pub show_progress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            strict_positive: false,
            self_test_on_start: false,
            show_progress: true,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            config.log_format = parse_log_format(&value)?;
        }
        if let Some(value) = lookup(ENV_STRICT_POSITIVE) {
            config.strict_positive = parse_flag(ENV_STRICT_POSITIVE, &value)?;
        }
        if let Some(value) = lookup(ENV_SELF_TEST_ON_START) {
            config.self_test_on_start = parse_flag(ENV_SELF_TEST_ON_START, &value)?;
        }
        if let Some(value) = lookup(ENV_PROGRESS) {
            config.show_progress = parse_flag(ENV_PROGRESS, &value)?;
        }

        Ok(config)
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" | "" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::InvalidValue {
            key: ENV_LOG_FORMAT,
            value: value.to_string(),
            expected: "text or json",
        }),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(!config.strict_positive);
        assert!(!config.self_test_on_start);
        assert!(config.show_progress);
    }

    #[test]
    fn test_flags_are_case_insensitive() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_STRICT_POSITIVE, "YES"),
            (ENV_SELF_TEST_ON_START, " On "),
            (ENV_PROGRESS, "0"),
            (ENV_LOG_FORMAT, "JSON"),
        ]))
        .unwrap();

        assert!(config.strict_positive);
        assert!(config.self_test_on_start);
        assert!(!config.show_progress);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_PROGRESS, "sometimes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_PROGRESS, .. }));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(err.to_string().contains("text or json"));
    }
}
