//! Environment lookups with typed parsing.
//!
//! Every reader takes a lookup function rather than touching `std::env`
//! directly, so tests can feed a `HashMap`. An empty value counts as unset.

use thiserror::Error;

/// Errors raised while resolving configuration. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse bool from {value:?} in env {key}")]
    InvalidBool { key: String, value: String },

    #[error("failed to parse number from {value:?} in env {key}")]
    InvalidNumber { key: String, value: String },

    #[error("missing required env var {0}")]
    Missing(String),

    #[error("config validation error at '{path}': {message}")]
    Invalid { path: String, message: String },
}

/// Parse a boolean the way the bot has always accepted it.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Non-empty value for `key`, if any.
pub fn lookup_opt<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

pub fn lookup_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup_opt(lookup, key).unwrap_or_else(|| default.to_string())
}

pub fn lookup_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup_opt(lookup, key) {
        None => Ok(default),
        Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
            key: key.to_string(),
            value,
        }),
    }
}

pub fn lookup_u32<F>(lookup: &F, key: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup_opt(lookup, key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value,
        }),
    }
}
