use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    InvalidValue { name: String, value: String },
}

/// Parses an optional raw value. Blank values count as unset.
pub fn parse_value<T: FromStr>(name: &str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match raw.map(|v| v.trim().to_string()) {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => v
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value: v,
            }),
    }
}

/// Parses a boolean flag, accepting `true/false`, `1/0`, `yes/no` and `on/off`.
pub fn parse_flag(name: &str, raw: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = raw.map(|v| v.trim().to_ascii_lowercase()) else {
        return Ok(None);
    };

    match value.as_str() {
        "" => Ok(None),
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
    }
}

/// Falls back to `default` when the value is unset or invalid, logging a
/// warning for the latter.
pub fn or_default<T>(result: Result<Option<T>, ConfigError>, default: T) -> T {
    match result {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to default configuration value");
            default
        }
    }
}

/// Reads a typed environment variable, defaulting when unset or unparseable.
pub fn var_or<T: FromStr>(name: &str, default: T) -> T {
    or_default(parse_value(name, env::var(name).ok()), default)
}

/// Reads a boolean environment variable, defaulting when unset or unparseable.
pub fn flag_or(name: &str, default: bool) -> bool {
    or_default(parse_flag(name, env::var(name).ok()), default)
}
