/// Spoke registry: collects spokes and freezes them into one command table.
use std::sync::Arc;

use tracing::{debug, info};

use bento_config::BotConfig;

use crate::spoke::Spoke;
use crate::subscriptions::GatewaySubscriptions;
use crate::table::{CommandTable, StaticReply};

pub const HELP_COMMAND: &str = "help";

#[derive(Default)]
pub struct SpokeRegistry {
    spokes: Vec<Arc<dyn Spoke>>,
}

impl SpokeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a spoke. No deduplication; registration order decides collisions.
    pub fn register<S: Spoke + 'static>(&mut self, spoke: S) {
        self.register_arc(Arc::new(spoke));
    }

    pub fn register_arc(&mut self, spoke: Arc<dyn Spoke>) {
        info!("[Spokes] Registered: {}", spoke.name());
        self.spokes.push(spoke);
    }

    /// Merge every spoke's commands, subscribe raw handlers on the gateway
    /// session, and add the synthesized `help` command.
    ///
    /// Consumes the registry: the returned table is frozen.
    pub fn build(
        self,
        config: &BotConfig,
        subscriptions: &mut GatewaySubscriptions,
    ) -> Arc<CommandTable> {
        let mut table = CommandTable::new();
        let spoke_count = self.spokes.len();

        for spoke in self.spokes {
            let name = spoke.name().to_string();

            for replaced in table.merge(spoke.commands()) {
                debug!(command = %replaced, spoke = %name, "Command overridden by later spoke");
            }

            let handlers = spoke.handlers();
            if let Some(handler) = handlers.message_create {
                subscriptions.add_message_create(name.clone(), handler);
            }
            if let Some(handler) = handlers.message_reaction {
                subscriptions.add_message_reaction(name.clone(), handler);
            }
        }

        let help = help_text(config, table.names());
        table.insert(HELP_COMMAND, Arc::new(StaticReply::new(help)));

        info!(
            spokes = spoke_count,
            commands = table.len(),
            message_create = subscriptions.message_create_count(),
            reaction_add = subscriptions.message_reaction_count(),
            "[Spokes] Command table frozen"
        );
        Arc::new(table)
    }
}

/// The reply to `help`: every known command with the configured prefix.
pub fn help_text<'a>(config: &BotConfig, names: impl Iterator<Item = &'a str>) -> String {
    let lines: Vec<String> = names
        .map(|name| format!("- {}{}", config.prefix, name))
        .collect();
    format!(
        ":grimacepeeking: {} commands:\n{}",
        config.bot_name,
        lines.join("\n")
    )
}
