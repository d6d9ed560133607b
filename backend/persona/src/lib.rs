//! Persona system prompts for the generative fallback.

pub mod composer;
pub mod presets;
pub mod prompt;

pub use composer::compose;
pub use presets::{evil_persona, for_config, friendly_persona};
pub use prompt::{PersonaAddin, PersonaPromptSpec};
