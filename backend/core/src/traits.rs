use anyhow::Result;
use async_trait::async_trait;

use crate::types::MessageRef;

/// Reply primitive exposed by the gateway session.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Send `text` to `channel_id` as a reply to `reference`.
    async fn send_reply(&self, channel_id: &str, text: &str, reference: &MessageRef) -> Result<()>;
}

/// Trait for generative-text providers used by the fallback path.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., "anthropic", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the response text segments.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;
}

/// Request to an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub system_prompt: String,
    /// User turns, oldest first.
    pub messages: Vec<String>,
    pub max_tokens: u32,
}

/// Response from an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Text blocks in the order the provider returned them.
    pub segments: Vec<String>,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}

impl LlmResponse {
    /// First text segment, if the provider returned one with content.
    pub fn first_text(&self) -> Option<&str> {
        self.segments
            .first()
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}
