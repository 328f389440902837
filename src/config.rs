//! Configuration loading for lockout options.

use std::path::Path;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::lockout::LockoutOptions;
use crate::{LockoutError, Result};

/// Environment variable overriding `lockout.allowed_for_new_users`.
pub const ENV_ALLOWED_FOR_NEW_USERS: &str = "LOCKOUT_ALLOWED_FOR_NEW_USERS";

/// Environment variable overriding `lockout.default_lockout_duration_secs`.
pub const ENV_DEFAULT_DURATION_SECS: &str = "LOCKOUT_DEFAULT_DURATION_SECS";

/// Environment variable overriding `lockout.max_failed_access_attempts`.
pub const ENV_MAX_FAILED_ACCESS_ATTEMPTS: &str = "LOCKOUT_MAX_FAILED_ACCESS_ATTEMPTS";

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "LOCKOUT_LOG_LEVEL";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file, written in addition to stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Lockout options.
    #[serde(default)]
    pub lockout: LockoutOptions,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(LockoutError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| LockoutError::Config(format!("config parse error: {e}")))
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| LockoutError::Config(format!("config serialize error: {e}")))
    }

    /// Apply overrides from the process environment.
    ///
    /// Supported environment variables:
    /// - `LOCKOUT_ALLOWED_FOR_NEW_USERS`: `true`/`false`/`1`/`0`
    /// - `LOCKOUT_DEFAULT_DURATION_SECS`: signed seconds
    /// - `LOCKOUT_MAX_FAILED_ACCESS_ATTEMPTS`: signed count
    /// - `LOCKOUT_LOG_LEVEL`: log level
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` to resolve variable names.
    ///
    /// Empty values are skipped. Values that fail to parse are skipped with a
    /// warning.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(ENV_ALLOWED_FOR_NEW_USERS) {
            match parse_bool(&value) {
                Some(allowed) => self.lockout.allowed_for_new_users = allowed,
                None => warn!(
                    var = ENV_ALLOWED_FOR_NEW_USERS,
                    value = %value,
                    "Ignoring invalid boolean override"
                ),
            }
        }

        if let Some(value) = get(ENV_DEFAULT_DURATION_SECS) {
            let duration = value.trim().parse::<i64>().ok().and_then(TimeDelta::try_seconds);
            match duration {
                Some(duration) => self.lockout.default_lockout_duration = duration,
                None => warn!(
                    var = ENV_DEFAULT_DURATION_SECS,
                    value = %value,
                    "Ignoring invalid duration override"
                ),
            }
        }

        if let Some(value) = get(ENV_MAX_FAILED_ACCESS_ATTEMPTS) {
            match value.trim().parse::<i32>() {
                Ok(attempts) => self.lockout.max_failed_access_attempts = attempts,
                Err(e) => warn!(
                    var = ENV_MAX_FAILED_ACCESS_ATTEMPTS,
                    value = %value,
                    error = %e,
                    "Ignoring invalid attempt count override"
                ),
            }
        }

        if let Some(value) = get(ENV_LOG_LEVEL) {
            self.logging.level = value.trim().to_string();
        }
    }

    /// Check the lockout options for values an enforcer cannot use.
    ///
    /// Loading never calls this. Returns an error if:
    /// - `max_failed_access_attempts` is negative
    /// - `default_lockout_duration_secs` is negative
    pub fn validate(&self) -> Result<()> {
        if self.lockout.max_failed_access_attempts < 0 {
            return Err(LockoutError::Validation(format!(
                "max_failed_access_attempts must not be negative (got {})",
                self.lockout.max_failed_access_attempts
            )));
        }
        if self.lockout.default_lockout_duration < TimeDelta::zero() {
            return Err(LockoutError::Validation(format!(
                "default_lockout_duration_secs must not be negative (got {}ms)",
                self.lockout.default_lockout_duration.num_milliseconds()
            )));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
