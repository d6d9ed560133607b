/// Generative fallback: ask the provider when the bot is tagged but no
/// command matched.
use std::sync::Arc;

use tracing::{error, info, warn};

use bento_config::BotConfig;
use bento_core::{replace_mention, BotError, BotIdentity, InboundMessage, LlmProvider, LlmRequest, ReplySink};
use bento_logging::redact_sensitive_data;

/// How a fallback attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackResult {
    /// A reply was produced and handed to the sink.
    Generated,
    /// The provider failed or returned nothing; no reply was sent.
    Suppressed,
}

pub struct FallbackInvoker {
    provider: Arc<dyn LlmProvider>,
    model: String,
    max_tokens: u32,
    bot_name: String,
}

impl FallbackInvoker {
    pub fn new(provider: Arc<dyn LlmProvider>, config: &BotConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            bot_name: config.bot_name.clone(),
        }
    }

    /// The user's text with the bot's own mention replaced by its display name.
    pub fn user_text(&self, msg: &InboundMessage, bot: &BotIdentity) -> String {
        replace_mention(&msg.content, &bot.id, &format!("@{}", self.bot_name))
    }

    /// One request, one reply. Provider errors are logged and swallowed.
    pub async fn invoke(
        &self,
        system_prompt: String,
        msg: &InboundMessage,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) -> FallbackResult {
        let text = self.user_text(msg, bot);

        info!(
            user = %msg.author.name,
            provider = self.provider.name(),
            system = %redact_sensitive_data(&system_prompt),
            msg = %redact_sensitive_data(&text),
            "Sending to LLM"
        );

        let request = LlmRequest {
            model: self.model.clone(),
            system_prompt,
            messages: vec![text],
            max_tokens: self.max_tokens,
        };

        let reply = match self.generate(&request).await {
            Ok(reply) => reply,
            Err(e @ BotError::EmptyResponse) => {
                warn!(error = %e, provider = self.provider.name(), "no reply generated");
                return FallbackResult::Suppressed;
            }
            Err(e) => {
                error!(error = %e, "error calling LLM");
                return FallbackResult::Suppressed;
            }
        };

        if let Err(e) = sink.send_reply(&msg.channel_id, &reply, &msg.reference()).await {
            error!(error = %e, channel = %msg.channel_id, "sending llm reply");
        }
        FallbackResult::Generated
    }

    async fn generate(&self, request: &LlmRequest) -> Result<String, BotError> {
        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| BotError::LlmError {
                provider: self.provider.name().to_string(),
                message: e.to_string(),
            })?;

        let reply = response.first_text().ok_or(BotError::EmptyResponse)?;
        info!(
            tokens = response.tokens_used,
            latency_ms = response.latency_ms,
            "LLM reply received"
        );
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::testing::RecordingSink;
    use bento_core::ChatUser;
    use bento_providers::MockProvider;

    fn invoker(provider: Arc<MockProvider>) -> FallbackInvoker {
        FallbackInvoker::new(provider, &BotConfig::default())
    }

    fn tagged(text: &str) -> InboundMessage {
        InboundMessage::new("m1", "c1", ChatUser::new("42", "ann"), text)
            .with_mention(ChatUser::bot("7", "Bento"))
    }

    #[test]
    fn bot_mention_becomes_display_name() {
        let fallback = invoker(Arc::new(MockProvider::new("mock")));
        let bot = BotIdentity::new("7");
        assert_eq!(fallback.user_text(&tagged("<@7> how are you"), &bot), "@Bento how are you");
        assert_eq!(fallback.user_text(&tagged("hey <@!7>"), &bot), "hey @Bento");
    }

    #[tokio::test]
    async fn request_carries_prompt_model_and_budget() {
        let provider = Arc::new(MockProvider::new("mock").with_response("hello"));
        let sink = RecordingSink::new();
        let result = invoker(provider.clone())
            .invoke("be brief".into(), &tagged("<@7> hi"), &BotIdentity::new("7"), &sink)
            .await;

        assert_eq!(result, FallbackResult::Generated);
        assert_eq!(sink.texts().await, vec!["hello".to_string()]);

        let request = provider.last_request().unwrap();
        assert_eq!(request.system_prompt, "be brief");
        assert_eq!(request.messages, vec!["@Bento hi".to_string()]);
        assert_eq!(request.model, "claude-3-haiku-20240307");
        assert_eq!(request.max_tokens, 300);
    }

    #[tokio::test]
    async fn blank_reply_is_suppressed() {
        let provider = Arc::new(MockProvider::new("mock").with_response("   "));
        let sink = RecordingSink::new();
        let result = invoker(provider)
            .invoke(String::new(), &tagged("<@7> hi"), &BotIdentity::new("7"), &sink)
            .await;

        assert_eq!(result, FallbackResult::Suppressed);
        assert!(sink.sent().await.is_empty());
    }

    #[tokio::test]
    async fn failed_send_is_logged_not_retried() {
        let provider = Arc::new(MockProvider::new("mock").with_response("hello"));
        let sink = RecordingSink::failing();
        let result = invoker(provider.clone())
            .invoke(String::new(), &tagged("<@7> hi"), &BotIdentity::new("7"), &sink)
            .await;

        assert_eq!(result, FallbackResult::Generated);
        assert_eq!(provider.calls(), 1);
        assert_eq!(sink.texts().await, vec!["hello".to_string()]);
    }
}
