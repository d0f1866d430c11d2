//! Configuration management for the dental registry.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default storage key for the session snapshot.
pub const DEFAULT_SESSION_KEY: &str = "dental_user";

/// Configuration for the registration portal core.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seconds before info/success notifications are removed (default: 5)
    pub notification_ttl_secs: u64,

    /// Simulated fingerprint capture latency in milliseconds (default: 2000)
    pub fingerprint_latency_ms: u64,

    /// Simulated face capture latency in milliseconds (default: 3000)
    pub face_latency_ms: u64,

    /// Probability that a fingerprint capture succeeds (default: 0.7)
    pub fingerprint_success_rate: f64,

    /// Probability that a face capture succeeds (default: 0.8)
    pub face_success_rate: f64,

    /// Simulated latency of biometric verification in milliseconds (default: 1500)
    pub verify_latency_ms: u64,

    /// Key the session snapshot is stored under (default: "dental_user")
    pub session_key: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `NOTIFICATION_TTL_SECONDS`: auto-expiry delay (default: 5)
    /// - `FINGERPRINT_LATENCY_MS`: fingerprint capture latency (default: 2000)
    /// - `FACE_LATENCY_MS`: face capture latency (default: 3000)
    /// - `FINGERPRINT_SUCCESS_RATE`: 0.0-1.0 (default: 0.7)
    /// - `FACE_SUCCESS_RATE`: 0.0-1.0 (default: 0.8)
    /// - `BIOMETRIC_VERIFY_LATENCY_MS`: verification latency (default: 1500)
    /// - `SESSION_KEY`: session snapshot key (default: "dental_user")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let notification_ttl_secs =
            Self::parse_env_u64("NOTIFICATION_TTL_SECONDS", defaults.notification_ttl_secs)?;
        let fingerprint_latency_ms =
            Self::parse_env_u64("FINGERPRINT_LATENCY_MS", defaults.fingerprint_latency_ms)?;
        let face_latency_ms = Self::parse_env_u64("FACE_LATENCY_MS", defaults.face_latency_ms)?;
        let fingerprint_success_rate =
            Self::parse_env_rate("FINGERPRINT_SUCCESS_RATE", defaults.fingerprint_success_rate)?;
        let face_success_rate =
            Self::parse_env_rate("FACE_SUCCESS_RATE", defaults.face_success_rate)?;
        let verify_latency_ms =
            Self::parse_env_u64("BIOMETRIC_VERIFY_LATENCY_MS", defaults.verify_latency_ms)?;

        let session_key = env::var("SESSION_KEY").unwrap_or(defaults.session_key);
        if session_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SESSION_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            notification_ttl_secs,
            fingerprint_latency_ms,
            face_latency_ms,
            fingerprint_success_rate,
            face_success_rate,
            verify_latency_ms,
            session_key,
            log_level,
        })
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a probability in [0, 1].
    fn parse_env_rate(var_name: &str, default: f64) -> ConfigResult<f64> {
        let rate = match env::var(var_name) {
            Ok(val) => val.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            })?,
            Err(_) => return Ok(default),
        };

        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be between 0 and 1".to_string(),
            });
        }

        Ok(rate)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notification_ttl_secs: 5,
            fingerprint_latency_ms: 2000,
            face_latency_ms: 3000,
            fingerprint_success_rate: 0.7,
            face_success_rate: 0.8,
            verify_latency_ms: 1500,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            log_level: "error".to_string(),
        }
    }
}
