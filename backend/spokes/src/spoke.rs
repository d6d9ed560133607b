//! The `Spoke` plugin contract.
//!
//! Every spoke contributes a command table. Raw event handling is opt-in: a
//! spoke implements `MessageCreateHandler` and/or `MessageReactionHandler` and
//! hands itself out through `SpokeHandlers`, so a spoke can only advertise a
//! capability it actually implements.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use bento_core::{BotIdentity, InboundMessage, ReactionEvent, ReplySink};

use crate::table::CommandTable;

/// Receives every message-create event the gateway delivers.
#[async_trait]
pub trait MessageCreateHandler: Send + Sync {
    async fn on_message_create(
        &self,
        msg: &InboundMessage,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) -> Result<()>;
}

/// Receives every reaction-add event the gateway delivers.
#[async_trait]
pub trait MessageReactionHandler: Send + Sync {
    async fn on_reaction_add(
        &self,
        event: &ReactionEvent,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) -> Result<()>;
}

/// The optional raw-event capabilities of one spoke.
#[derive(Clone, Default)]
pub struct SpokeHandlers {
    pub message_create: Option<Arc<dyn MessageCreateHandler>>,
    pub message_reaction: Option<Arc<dyn MessageReactionHandler>>,
}

impl SpokeHandlers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_message_create(mut self, handler: Arc<dyn MessageCreateHandler>) -> Self {
        self.message_create = Some(handler);
        self
    }

    pub fn with_message_reaction(mut self, handler: Arc<dyn MessageReactionHandler>) -> Self {
        self.message_reaction = Some(handler);
        self
    }
}

/// A pluggable unit of bot behaviour.
pub trait Spoke: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Commands this spoke answers to.
    fn commands(&self) -> CommandTable;

    /// Raw event capabilities. Most spokes have none.
    fn handlers(self: Arc<Self>) -> SpokeHandlers {
        SpokeHandlers::none()
    }
}
