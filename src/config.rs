//! Configuration for jsshealth.
//!
//! Settings load from `JSSHEALTH_*` environment variables with defaults.
//! Every threshold the evaluator or the extractors consult lives here; the
//! handful of empirical format constants (trailing-token offset, object
//! count offset) are deliberately overridable because they were measured
//! against live consoles, not derived from documentation.
//!
//! # Environment Variables
//!
//! - `JSSHEALTH_REQUEST_TIMEOUT`: HTTP timeout in seconds - default: "30"
//! - `JSSHEALTH_FETCH_CONCURRENCY`: parallel fetches - default: "4"
//! - `JSSHEALTH_CRITERIA_THRESHOLD`: smart-group criteria warning bar - default: "10"
//! - `JSSHEALTH_TABLE_TRAILING_TOKENS`: non-table tokens ending the table-sizes row - default: "11"
//! - `JSSHEALTH_OBJECT_COUNT_OFFSET`: list children that are not objects - default: "1"
//! - `JSSHEALTH_EXPIRATION_WARN_DAYS`: expiration warning window - default: "30"
//! - `JSSHEALTH_LEGACY_SUMMARY`: request the pre-9.93 summary form - default: "false"
//! - `JSSHEALTH_LOG_LEVEL`: logging level - default: "info"

use std::env;

use thiserror::Error;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FETCH_CONCURRENCY: usize = 4;
const DEFAULT_CRITERIA_THRESHOLD: u32 = 10;
const DEFAULT_TABLE_TRAILING_TOKENS: usize = 11;
const DEFAULT_OBJECT_COUNT_OFFSET: usize = 1;
const DEFAULT_EXPIRATION_WARN_DAYS: i64 = 30;
const DEFAULT_CHECKIN_WARN_PER_MINUTE: f64 = 100.0;
const DEFAULT_CHECKIN_CRITICAL_PER_MINUTE: f64 = 300.0;
const DEFAULT_DATABASE_WARN_MB: f64 = 5_000.0;
const DEFAULT_DATABASE_CRITICAL_MB: f64 = 20_000.0;
const DEFAULT_LARGE_TABLE_WARN_COUNT: usize = 1;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {field}: {error}")]
    ParseError { field: String, error: String },

    #[error("configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct JssHealthConfig {
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Bound on concurrent fetches, both across object kinds and within
    /// one kind's follow-up calls.
    pub fetch_concurrency: usize,

    /// Smart groups with more criteria than this are flagged.
    pub criteria_count_threshold: u32,

    /// Trailing non-table tokens in the table-sizes summary row.
    pub large_table_trailing_tokens: usize,

    /// List-response children that are bookkeeping, not objects (the
    /// leading `<size>` element).
    pub object_count_offset: usize,

    /// Days before an expiration is worth a warning.
    pub expiration_warn_days: i64,

    /// Check-ins per minute before warning / going critical.
    pub checkin_warn_per_minute: f64,
    pub checkin_critical_per_minute: f64,

    /// Database size bands in MB.
    pub database_warn_mb: f64,
    pub database_critical_mb: f64,

    /// Oversized-table count that alone warrants a warning.
    pub large_table_warn_count: usize,

    /// Request the reduced summary form served by consoles older than 9.93.
    pub legacy_summary: bool,

    /// Logging level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for JssHealthConfig {
    fn default() -> Self {
        JssHealthConfig {
            request_timeout_secs: env_parsed("JSSHEALTH_REQUEST_TIMEOUT")
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            fetch_concurrency: env_parsed("JSSHEALTH_FETCH_CONCURRENCY")
                .unwrap_or(DEFAULT_FETCH_CONCURRENCY),
            criteria_count_threshold: env_parsed("JSSHEALTH_CRITERIA_THRESHOLD")
                .unwrap_or(DEFAULT_CRITERIA_THRESHOLD),
            large_table_trailing_tokens: env_parsed("JSSHEALTH_TABLE_TRAILING_TOKENS")
                .unwrap_or(DEFAULT_TABLE_TRAILING_TOKENS),
            object_count_offset: env_parsed("JSSHEALTH_OBJECT_COUNT_OFFSET")
                .unwrap_or(DEFAULT_OBJECT_COUNT_OFFSET),
            expiration_warn_days: env_parsed("JSSHEALTH_EXPIRATION_WARN_DAYS")
                .unwrap_or(DEFAULT_EXPIRATION_WARN_DAYS),
            checkin_warn_per_minute: env_parsed("JSSHEALTH_CHECKIN_WARN_PER_MINUTE")
                .unwrap_or(DEFAULT_CHECKIN_WARN_PER_MINUTE),
            checkin_critical_per_minute: env_parsed("JSSHEALTH_CHECKIN_CRITICAL_PER_MINUTE")
                .unwrap_or(DEFAULT_CHECKIN_CRITICAL_PER_MINUTE),
            database_warn_mb: env_parsed("JSSHEALTH_DATABASE_WARN_MB")
                .unwrap_or(DEFAULT_DATABASE_WARN_MB),
            database_critical_mb: env_parsed("JSSHEALTH_DATABASE_CRITICAL_MB")
                .unwrap_or(DEFAULT_DATABASE_CRITICAL_MB),
            large_table_warn_count: env_parsed("JSSHEALTH_LARGE_TABLE_WARN_COUNT")
                .unwrap_or(DEFAULT_LARGE_TABLE_WARN_COUNT),
            legacy_summary: env_parsed("JSSHEALTH_LEGACY_SUMMARY").unwrap_or(false),
            log_level: env::var("JSSHEALTH_LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
                .to_lowercase(),
        }
    }
}

impl JssHealthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_concurrency == 0 {
            return Err(ConfigError::ValidationFailed(
                "fetch_concurrency must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.checkin_critical_per_minute < self.checkin_warn_per_minute {
            return Err(ConfigError::ValidationFailed(
                "checkin critical band below the warn band".to_string(),
            ));
        }
        if self.database_critical_mb < self.database_warn_mb {
            return Err(ConfigError::ValidationFailed(
                "database critical band below the warn band".to_string(),
            ));
        }
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "invalid log level {:?}",
                self.log_level
            )));
        }
        Ok(())
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = JssHealthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.large_table_trailing_tokens, 11);
        assert_eq!(config.object_count_offset, 1);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = JssHealthConfig {
            fetch_concurrency: 0,
            ..JssHealthConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_inverted_bands_rejected() {
        let config = JssHealthConfig {
            database_warn_mb: 10_000.0,
            database_critical_mb: 1_000.0,
            ..JssHealthConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let config = JssHealthConfig {
            log_level: "loud".to_string(),
            ..JssHealthConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
