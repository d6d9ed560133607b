use std::sync::{Arc, OnceLock};

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serenity::all::{
    ChannelId, Client, Context, CreateMessage, EventHandler, GatewayIntents, Http,
    Message as DiscordMessage, MessageId, Reaction, Ready, User,
};
use tracing::{debug, error, info};

use bento_core::{BotError, BotIdentity, ChatUser, InboundMessage, MessageRef, ReactionEvent, ReplySink};
use bento_spokes::GatewaySubscriptions;
use bento_commands::CommandDispatcher;

use crate::router::EventRouter;

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn to_user(user: &User) -> ChatUser {
    ChatUser {
        id: user.id.to_string(),
        name: user.name.clone(),
        bot: user.bot,
    }
}

pub fn to_inbound(msg: &DiscordMessage) -> InboundMessage {
    InboundMessage {
        id: msg.id.to_string(),
        channel_id: msg.channel_id.to_string(),
        content: msg.content.clone(),
        author: to_user(&msg.author),
        mentions: msg.mentions.iter().map(to_user).collect(),
    }
}

/// `None` when Discord did not say who reacted.
pub fn to_reaction(reaction: &Reaction) -> Option<ReactionEvent> {
    Some(ReactionEvent {
        channel_id: reaction.channel_id.to_string(),
        message_id: reaction.message_id.to_string(),
        user_id: reaction.user_id?.to_string(),
        emoji: reaction.emoji.to_string(),
    })
}

/// Discord snowflakes are non-zero u64s.
fn parse_snowflake(raw: &str) -> Result<u64, BotError> {
    match raw.parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(BotError::InvalidId(raw.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Reply sink
// ---------------------------------------------------------------------------

/// Sends replies through the Discord REST client.
pub struct DiscordReplySink {
    http: Arc<Http>,
}

impl DiscordReplySink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReplySink for DiscordReplySink {
    async fn send_reply(&self, channel_id: &str, text: &str, reference: &MessageRef) -> Result<()> {
        let channel = ChannelId::new(parse_snowflake(channel_id)?);
        let referenced = (
            ChannelId::new(parse_snowflake(&reference.channel_id)?),
            MessageId::new(parse_snowflake(&reference.message_id)?),
        );

        let builder = CreateMessage::new().content(text).reference_message(referenced);
        channel
            .send_message(&self.http, builder)
            .await
            .map_err(|e| BotError::SendFailed {
                channel_id: channel_id.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Gateway event handler
// ---------------------------------------------------------------------------

struct Handler {
    router: Arc<EventRouter>,
    identity: Arc<OnceLock<BotIdentity>>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: DiscordMessage) {
        let Some(bot) = self.identity.get() else {
            debug!("Message received before ready; dropping");
            return;
        };
        let sink = DiscordReplySink::new(ctx.http.clone());
        let inbound = to_inbound(&msg);
        let outcome = self.router.on_message(&inbound, bot, &sink).await;
        debug!(message_id = %inbound.id, ?outcome, "message handled");
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let Some(bot) = self.identity.get() else {
            return;
        };
        let Some(event) = to_reaction(&reaction) else {
            return;
        };
        let sink = DiscordReplySink::new(ctx.http.clone());
        self.router.on_reaction(&event, bot, &sink).await;
    }

    async fn ready(&self, _: Context, ready: Ready) {
        let identity = BotIdentity::new(ready.user.id.to_string());
        if self.identity.set(identity).is_err() {
            debug!("Reconnected; keeping existing bot identity");
        }
        info!("{} is connected!", ready.user.name);
    }
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// The Discord gateway session.
///
/// Spokes subscribe through `subscriptions_mut` before `run` connects.
pub struct DiscordGateway {
    token: String,
    subscriptions: GatewaySubscriptions,
}

impl DiscordGateway {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            subscriptions: GatewaySubscriptions::new(),
        }
    }

    pub fn subscriptions_mut(&mut self) -> &mut GatewaySubscriptions {
        &mut self.subscriptions
    }

    /// Connect and process events until the session ends.
    ///
    /// Fails immediately if the client cannot be constructed.
    pub async fn run(self, dispatcher: CommandDispatcher) -> Result<()> {
        info!("Starting Discord gateway");

        let intents = GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
            | GatewayIntents::GUILD_MESSAGE_REACTIONS
            | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

        let handler = Handler {
            router: Arc::new(EventRouter::new(dispatcher, self.subscriptions)),
            identity: Arc::new(OnceLock::new()),
        };

        let mut client = Client::builder(&self.token, intents)
            .event_handler(handler)
            .await
            .context("Error creating Discord session")?;

        if let Err(why) = client.start().await {
            error!("Client error: {:?}", why);
            return Err(BotError::Gateway(why.to_string()).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflakes_must_be_nonzero_numbers() {
        assert_eq!(parse_snowflake("80351110224678912").unwrap(), 80351110224678912);
        assert!(matches!(parse_snowflake("0"), Err(BotError::InvalidId(_))));
        assert!(matches!(parse_snowflake("abc"), Err(BotError::InvalidId(_))));
    }
}
