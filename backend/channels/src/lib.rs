pub mod discord;
pub mod router;

pub use discord::{DiscordGateway, DiscordReplySink};
pub use router::EventRouter;
