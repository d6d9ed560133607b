use thiserror::Error;

/// Top-level error type for the Bento runtime.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("LLM provider error ({provider}): {message}")]
    LlmError { provider: String, message: String },

    #[error("LLM provider returned no text")]
    EmptyResponse,

    #[error("reply send failed on channel {channel_id}: {message}")]
    SendFailed { channel_id: String, message: String },

    #[error("invalid platform id: {0}")]
    InvalidId(String),

    #[error("gateway error: {0}")]
    Gateway(String),
}
