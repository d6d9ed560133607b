pub mod anthropic;
pub mod mock;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;
