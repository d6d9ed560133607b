//! Config validation: checks run once after loading.

use crate::env::ConfigError;
use crate::schema::BotConfig;

/// A collection of validation problems found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<ConfigError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigError::Invalid {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigError::Invalid {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &BotConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.prefix.is_empty() {
        report.error("prefix", "Command prefix cannot be empty");
    } else if config.prefix.chars().any(char::is_whitespace) {
        report.error("prefix", "Command prefix cannot contain whitespace");
    }

    if config.bot_name.trim().is_empty() {
        report.error("bot_name", "Bot name cannot be blank");
    }

    if config.max_tokens == 0 {
        report.error("max_tokens", "Response budget must be greater than zero");
    }

    if !config.fallback_enabled() {
        report.warn("anthropic_key", "No provider key set; generative fallback disabled");
    } else if config.model.trim().is_empty() {
        report.error("model", "Model cannot be blank when the fallback is enabled");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_with_warning() {
        let report = validate(&BotConfig::default());
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn rejects_whitespace_prefix() {
        let config = BotConfig {
            prefix: "! ".into(),
            ..BotConfig::default()
        };
        assert!(!validate(&config).is_valid());
    }

    #[test]
    fn rejects_zero_budget() {
        let config = BotConfig {
            max_tokens: 0,
            anthropic_key: Some("k".into()),
            ..BotConfig::default()
        };
        let report = validate(&config);
        assert_eq!(report.errors.len(), 1);
        assert!(report.warnings.is_empty());
    }
}
