//! Centralized configuration for lambda-coach.
//!
//! All environment variables are loaded and validated at cold start to fail
//! fast on misconfiguration rather than at request time.

use std::env;
use std::fmt;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain single-line text without ANSI colors (CloudWatch friendly)
    Text,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding coach items (`CoachData_table`, required)
    pub table_name: String,
    /// Log format (`LOG_FORMAT`, default text)
    pub log_format: LogFormat,
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(aws_dynamo::TABLE_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError {
                field: aws_dynamo::TABLE_ENV,
                message: "Required; name of the coach DynamoDB table".into(),
            })?;

        let log_format = LogFormat::from_str(&lookup("LOG_FORMAT").unwrap_or_else(|| "text".into()));

        Ok(Self {
            table_name,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::from_str("text"), LogFormat::Text);
        assert_eq!(LogFormat::from_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str("anything"), LogFormat::Text);
    }

    #[test]
    fn loads_table_name() {
        let cfg = Config::from_lookup(lookup_in(&[("CoachData_table", "CoachData")])).unwrap();
        assert_eq!(cfg.table_name, "CoachData");
        assert_eq!(cfg.log_format, LogFormat::Text);
    }

    #[test]
    fn reads_log_format() {
        let cfg = Config::from_lookup(lookup_in(&[
            ("CoachData_table", "CoachData"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn missing_or_blank_table_fails() {
        let err = Config::from_lookup(lookup_in(&[])).unwrap_err();
        assert_eq!(err.field, "CoachData_table");

        let err = Config::from_lookup(lookup_in(&[("CoachData_table", "  ")])).unwrap_err();
        assert_eq!(err.field, "CoachData_table");
    }

    #[test]
    fn padded_table_name_is_trimmed() {
        let cfg = Config::from_lookup(lookup_in(&[("CoachData_table", " CoachData\n")])).unwrap();
        assert_eq!(cfg.table_name, "CoachData");
    }
}
