//! Gateway event subscriptions.
//!
//! The gateway session owns one `GatewaySubscriptions`. `SpokeRegistry::build`
//! fills it before the session connects; afterwards it is only read.

use std::sync::Arc;

use tracing::{debug, warn};

use bento_core::{BotIdentity, InboundMessage, ReactionEvent, ReplySink};

use crate::spoke::{MessageCreateHandler, MessageReactionHandler};

#[derive(Clone, Default)]
pub struct GatewaySubscriptions {
    message_create: Vec<(String, Arc<dyn MessageCreateHandler>)>,
    message_reaction: Vec<(String, Arc<dyn MessageReactionHandler>)>,
}

impl GatewaySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message_create(&mut self, owner: impl Into<String>, handler: Arc<dyn MessageCreateHandler>) {
        self.message_create.push((owner.into(), handler));
    }

    pub fn add_message_reaction(
        &mut self,
        owner: impl Into<String>,
        handler: Arc<dyn MessageReactionHandler>,
    ) {
        self.message_reaction.push((owner.into(), handler));
    }

    pub fn message_create_count(&self) -> usize {
        self.message_create.len()
    }

    pub fn message_reaction_count(&self) -> usize {
        self.message_reaction.len()
    }

    /// Fan a message-create event out to every subscriber.
    /// A failing subscriber is logged and does not stop the others.
    pub async fn publish_message_create(
        &self,
        msg: &InboundMessage,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) {
        for (owner, handler) in &self.message_create {
            debug!(spoke = %owner, message_id = %msg.id, "message_create");
            if let Err(e) = handler.on_message_create(msg, bot, sink).await {
                warn!(spoke = %owner, error = %e, "message_create handler failed");
            }
        }
    }

    /// Fan a reaction-add event out to every subscriber.
    pub async fn publish_reaction_add(
        &self,
        event: &ReactionEvent,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) {
        for (owner, handler) in &self.message_reaction {
            debug!(spoke = %owner, message_id = %event.message_id, "reaction_add");
            if let Err(e) = handler.on_reaction_add(event, bot, sink).await {
                warn!(spoke = %owner, error = %e, "reaction_add handler failed");
            }
        }
    }
}
