/// Built-in spokes shipped with the bot.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use bento_core::{BotIdentity, InboundMessage, ReactionEvent, ReplySink};

use crate::spoke::{MessageCreateHandler, MessageReactionHandler, Spoke, SpokeHandlers};
use crate::table::{CommandContext, CommandHandler, CommandResponse, CommandTable, StaticReply};

// ---------------------------------------------------------------------------
// ping
// ---------------------------------------------------------------------------

pub struct PingSpoke;

impl Spoke for PingSpoke {
    fn name(&self) -> &str {
        "ping"
    }

    fn commands(&self) -> CommandTable {
        CommandTable::new().with("ping", Arc::new(StaticReply::new("pong 🏓")))
    }
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

pub struct DiceSpoke;

struct RollHandler;

#[async_trait]
impl CommandHandler for RollHandler {
    async fn handle(&self, ctx: &CommandContext<'_>) -> Result<CommandResponse> {
        let face = ((ctx.draws.draw() * 6.0) as u32).min(5) + 1;
        Ok(CommandResponse::ok(format!("🎲 {}", face)))
    }
}

impl Spoke for DiceSpoke {
    fn name(&self) -> &str {
        "dice"
    }

    fn commands(&self) -> CommandTable {
        CommandTable::new().with("roll", Arc::new(RollHandler))
    }
}

// ---------------------------------------------------------------------------
// good bot
// ---------------------------------------------------------------------------

pub const BENTO_EMOJI: &str = "🍱";

/// Thanks people who say "good bot" and notices 🍱 reactions.
pub struct GoodBotSpoke;

#[async_trait]
impl MessageCreateHandler for GoodBotSpoke {
    async fn on_message_create(
        &self,
        msg: &InboundMessage,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) -> Result<()> {
        if msg.author.bot || bot.is(&msg.author) {
            return Ok(());
        }
        if msg.content.to_lowercase().contains("good bot") {
            sink.send_reply(&msg.channel_id, BENTO_EMOJI, &msg.reference()).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl MessageReactionHandler for GoodBotSpoke {
    async fn on_reaction_add(
        &self,
        event: &ReactionEvent,
        bot: &BotIdentity,
        _sink: &dyn ReplySink,
    ) -> Result<()> {
        if event.user_id != bot.id && event.emoji == BENTO_EMOJI {
            info!(user = %event.user_id, message_id = %event.message_id, "Bento reaction");
        }
        Ok(())
    }
}

impl Spoke for GoodBotSpoke {
    fn name(&self) -> &str {
        "good-bot"
    }

    fn commands(&self) -> CommandTable {
        CommandTable::new()
    }

    fn handlers(self: Arc<Self>) -> SpokeHandlers {
        SpokeHandlers::none()
            .with_message_create(self.clone())
            .with_message_reaction(self)
    }
}
