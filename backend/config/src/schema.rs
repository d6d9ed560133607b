use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::defaults::*;
use crate::env::{lookup_bool, lookup_opt, lookup_or, lookup_u32, ConfigError};

/// Process-wide configuration, resolved once at startup and never mutated.
#[derive(Clone, Serialize)]
pub struct BotConfig {
    /// Display name the bot uses for itself.
    pub bot_name: String,
    /// Command prefix, e.g. `.` in `.help`.
    pub prefix: String,
    /// Use the evil persona for generative replies.
    pub evil: bool,
    /// Answer every tagged message with the protest reply.
    pub protesting: bool,
    /// Generative provider credential. `None` disables the fallback.
    #[serde(skip_serializing)]
    pub anthropic_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    /// Discord bot token.
    #[serde(skip_serializing)]
    pub discord_token: Option<String>,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            evil: false,
            protesting: false,
            anthropic_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            discord_token: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("BotConfig")
            .field("bot_name", &self.bot_name)
            .field("prefix", &self.prefix)
            .field("evil", &self.evil)
            .field("protesting", &self.protesting)
            .field("anthropic_key", &redacted(&self.anthropic_key))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("discord_token", &redacted(&self.discord_token))
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

impl BotConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup (useful for testing).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let evil = lookup_bool(&lookup, ENV_EVIL, false)?;
        let default_name = if evil { DEFAULT_EVIL_BOT_NAME } else { DEFAULT_BOT_NAME };

        Ok(Self {
            bot_name: lookup_or(&lookup, ENV_BOT_NAME, default_name),
            prefix: lookup_or(&lookup, ENV_PREFIX, DEFAULT_PREFIX),
            evil,
            protesting: lookup_bool(&lookup, ENV_PROTESTING, false)?,
            anthropic_key: lookup_opt(&lookup, ENV_ANTHROPIC_KEY),
            model: lookup_or(&lookup, ENV_MODEL, DEFAULT_MODEL),
            max_tokens: lookup_u32(&lookup, ENV_MAX_TOKENS, DEFAULT_MAX_TOKENS)?,
            discord_token: lookup_opt(&lookup, ENV_DISCORD_TOKEN),
            log_level: lookup_or(&lookup, ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL),
            log_dir: lookup_opt(&lookup, ENV_LOG_DIR).map(PathBuf::from),
        })
    }

    /// Whether the generative fallback path is available.
    pub fn fallback_enabled(&self) -> bool {
        self.anthropic_key.is_some()
    }

    /// The Discord token, required only when connecting to the gateway.
    pub fn require_discord_token(&self) -> Result<&str, ConfigError> {
        self.discord_token
            .as_deref()
            .ok_or_else(|| ConfigError::Missing(ENV_DISCORD_TOKEN.to_string()))
    }
}
