pub mod canned;
pub mod detection;
pub mod dispatch;
pub mod fallback;

pub use canned::{BOT_FREELOADING, PROTEST_MESSAGE};
pub use detection::{resolve_trigger, Trigger};
pub use dispatch::{CommandDispatcher, Outcome};
pub use fallback::{FallbackInvoker, FallbackResult};
