/// Command dispatch: route an inbound message to a handler, the protest
/// reply, or the generative fallback.
use std::sync::Arc;

use tracing::{debug, error, info};

use bento_config::BotConfig;
use bento_core::{pick, BotIdentity, DrawSource, InboundMessage, ReplySink};
use bento_persona::{compose, PersonaPromptSpec};
use bento_spokes::{CommandContext, CommandTable};

use crate::canned::{BOT_FREELOADING, PROTEST_MESSAGE};
use crate::detection::resolve_trigger;
use crate::fallback::{FallbackInvoker, FallbackResult};

/// Terminal state of one inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    CommandHandled,
    ProtestShortCircuit,
    FallbackCanned,
    FallbackGenerated,
    FallbackSuppressed,
}

pub struct CommandDispatcher {
    config: Arc<BotConfig>,
    table: Arc<CommandTable>,
    persona: PersonaPromptSpec,
    fallback: Option<FallbackInvoker>,
    draws: Arc<dyn DrawSource>,
}

impl CommandDispatcher {
    /// A dispatcher with no generative fallback, using the persona the
    /// config selects.
    pub fn new(config: Arc<BotConfig>, table: Arc<CommandTable>, draws: Arc<dyn DrawSource>) -> Self {
        let persona = bento_persona::for_config(&config);
        Self {
            config,
            table,
            persona,
            fallback: None,
            draws,
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackInvoker) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn with_persona(mut self, persona: PersonaPromptSpec) -> Self {
        self.persona = persona;
        self
    }

    pub async fn dispatch(
        &self,
        msg: &InboundMessage,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) -> Outcome {
        if bot.is(&msg.author) {
            return Outcome::Ignored;
        }

        let trigger = resolve_trigger(&msg.content, &msg.mentions, bot, &self.config.prefix);
        if trigger.is_none() {
            return Outcome::Ignored;
        }

        if trigger.tagged && self.config.protesting {
            info!(user = %msg.author.name, "Protesting; short-circuiting tagged message");
            self.reply(msg, sink, PROTEST_MESSAGE).await;
            return Outcome::ProtestShortCircuit;
        }

        if let Some(handler) = self.table.get(&trigger.token) {
            info!("[Commands] Dispatching {}{} for {}", self.config.prefix, trigger.token, msg.author.name);
            let ctx = CommandContext {
                message: msg,
                config: &self.config,
                draws: self.draws.as_ref(),
            };
            match handler.handle(&ctx).await {
                Ok(response) => self.reply(msg, sink, &response.text).await,
                Err(e) => error!(command = %trigger.token, error = %e, "command handler failed"),
            }
            return Outcome::CommandHandled;
        }

        if !trigger.tagged {
            debug!(token = %trigger.token, "Unknown command ignored");
            return Outcome::Ignored;
        }

        let Some(fallback) = &self.fallback else {
            debug!("Tagged without a command and no provider configured");
            return Outcome::Ignored;
        };

        if msg.author.bot {
            if let Some(line) = pick(BOT_FREELOADING, self.draws.as_ref()) {
                self.reply(msg, sink, line).await;
            }
            return Outcome::FallbackCanned;
        }

        let system = compose(&self.persona, &msg.author.id, self.draws.as_ref());
        match fallback.invoke(system, msg, bot, sink).await {
            FallbackResult::Generated => Outcome::FallbackGenerated,
            FallbackResult::Suppressed => Outcome::FallbackSuppressed,
        }
    }

    async fn reply(&self, msg: &InboundMessage, sink: &dyn ReplySink, text: &str) {
        if let Err(e) = sink.send_reply(&msg.channel_id, text, &msg.reference()).await {
            error!(error = %e, channel = %msg.channel_id, "reply send failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::testing::RecordingSink;
    use bento_core::{ChatUser, ScriptedDraws};
    use bento_providers::MockProvider;
    use bento_spokes::{GatewaySubscriptions, PingSpoke, SpokeRegistry};

    const BOT_ID: &str = "123";

    fn bot() -> BotIdentity {
        BotIdentity::new(BOT_ID)
    }

    fn me() -> ChatUser {
        ChatUser::bot(BOT_ID, "Bento")
    }

    fn human() -> ChatUser {
        ChatUser::new("42", "alice")
    }

    fn config(protesting: bool) -> Arc<BotConfig> {
        Arc::new(BotConfig {
            protesting,
            anthropic_key: Some("sk-ant-test".into()),
            ..BotConfig::default()
        })
    }

    fn dispatcher(config: Arc<BotConfig>, provider: Option<Arc<MockProvider>>) -> CommandDispatcher {
        let mut registry = SpokeRegistry::new();
        registry.register(PingSpoke);
        let table = registry.build(&config, &mut GatewaySubscriptions::new());
        let draws: Arc<dyn DrawSource> = Arc::new(ScriptedDraws::new(vec![0.0]));
        let fallback = provider.map(|p| FallbackInvoker::new(p, &config));
        let dispatcher = CommandDispatcher::new(config, table, draws);
        match fallback {
            Some(f) => dispatcher.with_fallback(f),
            None => dispatcher,
        }
    }

    fn tagged(author: ChatUser, text: &str) -> InboundMessage {
        InboundMessage::new("m1", "c1", author, text).with_mention(me())
    }

    #[tokio::test]
    async fn prefixed_command_replies_to_the_message() {
        let sink = RecordingSink::new();
        let msg = InboundMessage::new("m1", "c1", human(), ".ping");
        let outcome = dispatcher(config(false), None).dispatch(&msg, &bot(), &sink).await;

        assert_eq!(outcome, Outcome::CommandHandled);
        let sent = sink.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].text, "pong 🏓");
        assert_eq!(sent[0].channel_id, "c1");
        assert_eq!(sent[0].reference, msg.reference());
    }

    #[tokio::test]
    async fn tagged_command_runs_the_handler() {
        let sink = RecordingSink::new();
        let outcome = dispatcher(config(false), None)
            .dispatch(&tagged(human(), "<@123> ping"), &bot(), &sink)
            .await;
        assert_eq!(outcome, Outcome::CommandHandled);
        assert_eq!(sink.texts().await, vec!["pong 🏓".to_string()]);
    }

    #[tokio::test]
    async fn self_authored_messages_are_ignored() {
        let sink = RecordingSink::new();
        let msg = InboundMessage::new("m1", "c1", me(), ".ping");
        let outcome = dispatcher(config(false), None).dispatch(&msg, &bot(), &sink).await;
        assert_eq!(outcome, Outcome::Ignored);
        assert!(sink.sent().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_untagged_command_is_ignored() {
        let sink = RecordingSink::new();
        let provider = Arc::new(MockProvider::new("mock"));
        let msg = InboundMessage::new("m1", "c1", human(), ".nope");
        let outcome = dispatcher(config(false), Some(provider.clone()))
            .dispatch(&msg, &bot(), &sink)
            .await;
        assert_eq!(outcome, Outcome::Ignored);
        assert!(sink.sent().await.is_empty());
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn protest_overrides_matching_command() {
        let sink = RecordingSink::new();
        let provider = Arc::new(MockProvider::new("mock"));
        let outcome = dispatcher(config(true), Some(provider.clone()))
            .dispatch(&tagged(human(), "<@123> ping"), &bot(), &sink)
            .await;
        assert_eq!(outcome, Outcome::ProtestShortCircuit);
        assert_eq!(sink.texts().await, vec![PROTEST_MESSAGE.to_string()]);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn protest_leaves_prefixed_commands_alone() {
        let sink = RecordingSink::new();
        let msg = InboundMessage::new("m1", "c1", human(), ".ping");
        let outcome = dispatcher(config(true), None).dispatch(&msg, &bot(), &sink).await;
        assert_eq!(outcome, Outcome::CommandHandled);
    }

    #[tokio::test]
    async fn tagged_without_provider_does_nothing() {
        let sink = RecordingSink::new();
        let outcome = dispatcher(config(false), None)
            .dispatch(&tagged(human(), "<@123> tell me a joke"), &bot(), &sink)
            .await;
        assert_eq!(outcome, Outcome::Ignored);
        assert!(sink.sent().await.is_empty());
    }

    #[tokio::test]
    async fn bot_sender_gets_canned_reply_without_provider_call() {
        let sink = RecordingSink::new();
        let provider = Arc::new(MockProvider::new("mock"));
        let outcome = dispatcher(config(false), Some(provider.clone()))
            .dispatch(&tagged(ChatUser::bot("777", "otherbot"), "<@123> hello"), &bot(), &sink)
            .await;

        assert_eq!(outcome, Outcome::FallbackCanned);
        assert_eq!(provider.calls(), 0);
        let texts = sink.texts().await;
        assert_eq!(texts.len(), 1);
        assert!(BOT_FREELOADING.contains(&texts[0].as_str()));
    }

    #[tokio::test]
    async fn human_tag_goes_to_provider() {
        let sink = RecordingSink::new();
        let provider = Arc::new(MockProvider::new("mock").with_response("ha, nice try"));
        let outcome = dispatcher(config(false), Some(provider.clone()))
            .dispatch(&tagged(human(), "<@123> tell me a joke"), &bot(), &sink)
            .await;

        assert_eq!(outcome, Outcome::FallbackGenerated);
        assert_eq!(sink.texts().await, vec!["ha, nice try".to_string()]);

        let request = provider.last_request().unwrap();
        assert_eq!(request.messages, vec!["@Bento tell me a joke".to_string()]);
        assert_eq!(request.max_tokens, 300);
        assert_eq!(request.model, "claude-3-haiku-20240307");
        assert!(request.system_prompt.ends_with("'<@42>'."));
    }

    #[tokio::test]
    async fn provider_failure_sends_nothing() {
        let sink = RecordingSink::new();
        let provider = Arc::new(MockProvider::failing("mock"));
        let outcome = dispatcher(config(false), Some(provider.clone()))
            .dispatch(&tagged(human(), "<@123> hi"), &bot(), &sink)
            .await;
        assert_eq!(outcome, Outcome::FallbackSuppressed);
        assert_eq!(provider.calls(), 1);
        assert!(sink.sent().await.is_empty());
    }

    #[tokio::test]
    async fn send_failure_is_swallowed() {
        let sink = RecordingSink::failing();
        let msg = InboundMessage::new("m1", "c1", human(), ".ping");
        let outcome = dispatcher(config(false), None).dispatch(&msg, &bot(), &sink).await;
        assert_eq!(outcome, Outcome::CommandHandled);
        assert_eq!(sink.sent().await.len(), 1);
    }

    #[tokio::test]
    async fn custom_persona_shapes_the_system_prompt() {
        let sink = RecordingSink::new();
        let provider = Arc::new(MockProvider::new("mock"));
        let persona = PersonaPromptSpec::new("You are a cat.", "").with_addin("Meow.", 1.0);
        let outcome = dispatcher(config(false), Some(provider.clone()))
            .with_persona(persona)
            .dispatch(&tagged(human(), "<@123> hi"), &bot(), &sink)
            .await;

        assert_eq!(outcome, Outcome::FallbackGenerated);
        assert_eq!(
            provider.last_request().unwrap().system_prompt,
            "You are a cat. Meow. You can refer to the user asking the question with the string '<@42>'."
        );
    }
}
