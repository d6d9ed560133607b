//! Platform-independent event routing.
//!
//! Every inbound message goes to the spoke subscriptions and then to the
//! command dispatcher. Reactions only go to subscriptions.

use bento_commands::{CommandDispatcher, Outcome};
use bento_core::{BotIdentity, InboundMessage, ReactionEvent, ReplySink};
use bento_spokes::GatewaySubscriptions;

pub struct EventRouter {
    dispatcher: CommandDispatcher,
    subscriptions: GatewaySubscriptions,
}

impl EventRouter {
    pub fn new(dispatcher: CommandDispatcher, subscriptions: GatewaySubscriptions) -> Self {
        Self {
            dispatcher,
            subscriptions,
        }
    }

    pub async fn on_message(
        &self,
        msg: &InboundMessage,
        bot: &BotIdentity,
        sink: &dyn ReplySink,
    ) -> Outcome {
        self.subscriptions.publish_message_create(msg, bot, sink).await;
        self.dispatcher.dispatch(msg, bot, sink).await
    }

    pub async fn on_reaction(&self, event: &ReactionEvent, bot: &BotIdentity, sink: &dyn ReplySink) {
        self.subscriptions.publish_reaction_add(event, bot, sink).await;
    }
}
