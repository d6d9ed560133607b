//! Config defaults used when an environment variable is unset or empty.

pub const DEFAULT_BOT_NAME: &str = "Bento";

/// Name used when the evil toggle is on and no name is configured.
pub const DEFAULT_EVIL_BOT_NAME: &str = "Evil Bento";

pub const DEFAULT_PREFIX: &str = ".";

/// Model used for the generative fallback.
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

/// Response budget for one fallback reply.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

pub const DEFAULT_LOG_LEVEL: &str = "info";

// Environment variable names.
pub const ENV_BOT_NAME: &str = "BENTO_NAME";
pub const ENV_PREFIX: &str = "BENTO_PREFIX";
pub const ENV_EVIL: &str = "BENTO_EVIL";
pub const ENV_PROTESTING: &str = "BENTO_PROTESTING";
pub const ENV_ANTHROPIC_KEY: &str = "BENTO_ANTHROPIC_KEY";
pub const ENV_MODEL: &str = "BENTO_MODEL";
pub const ENV_MAX_TOKENS: &str = "BENTO_MAX_TOKENS";
pub const ENV_DISCORD_TOKEN: &str = "API_TOKEN";
pub const ENV_LOG_LEVEL: &str = "RUST_LOG";
pub const ENV_LOG_DIR: &str = "BENTO_LOG_DIR";
