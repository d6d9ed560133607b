pub mod builtin;
pub mod registry;
pub mod spoke;
pub mod subscriptions;
pub mod table;

pub use builtin::{DiceSpoke, GoodBotSpoke, PingSpoke};
pub use registry::{help_text, SpokeRegistry, HELP_COMMAND};
pub use spoke::{MessageCreateHandler, MessageReactionHandler, Spoke, SpokeHandlers};
pub use subscriptions::GatewaySubscriptions;
pub use table::{CommandContext, CommandHandler, CommandResponse, CommandTable, StaticReply};
