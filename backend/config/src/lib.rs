//! `bento-config`: startup configuration for the Bento bot.
//!
//! Provides:
//! - Typed `BotConfig` resolved from environment variables
//! - Strict boolean / number parsing (malformed values are fatal)
//! - Validation with errors and warnings

pub mod defaults;
pub mod env;
pub mod schema;
pub mod validation;

pub use env::{parse_bool, ConfigError};
pub use schema::BotConfig;
pub use validation::{validate, ValidationReport};

/// Validate a loaded config, logging warnings.
///
/// Call after logging is initialised; the first validation error is returned.
pub fn check(config: &BotConfig) -> Result<(), ConfigError> {
    let report = validate(config);
    for warning in &report.warnings {
        tracing::warn!(%warning, "Config warning");
    }
    match report.errors.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
