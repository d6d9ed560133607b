pub mod error;
pub mod mention;
pub mod random;
pub mod testing;
pub mod traits;
pub mod types;

pub use error::BotError;
pub use mention::{mention_tag, replace_mention, strip_mention};
pub use random::{pick, DrawSource, ScriptedDraws, SeededDraws, ThreadRngDraws};
pub use traits::{LlmProvider, LlmRequest, LlmResponse, ReplySink};
pub use types::{BotIdentity, ChatUser, InboundMessage, MessageRef, ReactionEvent};
