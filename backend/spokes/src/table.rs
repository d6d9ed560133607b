/// Command tables: map command names to handlers.
///
/// Insertion order is preserved so `help` lists commands in declaration order.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;

use bento_config::BotConfig;
use bento_core::{DrawSource, InboundMessage};

// ---------------------------------------------------------------------------
// Handler trait
// ---------------------------------------------------------------------------

/// Context passed to every command handler.
pub struct CommandContext<'a> {
    pub message: &'a InboundMessage,
    pub config: &'a BotConfig,
    pub draws: &'a dyn DrawSource,
}

/// The text reply a command handler wants sent back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub text: String,
}

impl CommandResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, ctx: &CommandContext<'_>) -> Result<CommandResponse>;
}

/// Handler that always answers with the same text.
pub struct StaticReply {
    text: String,
}

impl StaticReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl CommandHandler for StaticReply {
    async fn handle(&self, _ctx: &CommandContext<'_>) -> Result<CommandResponse> {
        Ok(CommandResponse::ok(self.text.clone()))
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct CommandTable {
    entries: IndexMap<String, Arc<dyn CommandHandler>>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, handler: Arc<dyn CommandHandler>) -> Self {
        self.insert(name, handler);
        self
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Option<Arc<dyn CommandHandler>> {
        self.entries.insert(name.into(), handler)
    }

    /// Merge `other` into `self`; entries from `other` win.
    /// Returns the names that were overwritten.
    pub fn merge(&mut self, other: CommandTable) -> Vec<String> {
        let mut replaced = Vec::new();
        for (name, handler) in other.entries {
            if self.entries.insert(name.clone(), handler).is_some() {
                replaced.push(name);
            }
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Command names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_in_place() {
        let mut table = CommandTable::new()
            .with("a", Arc::new(StaticReply::new("1")))
            .with("b", Arc::new(StaticReply::new("2")));
        let replaced = table.merge(
            CommandTable::new()
                .with("a", Arc::new(StaticReply::new("3")))
                .with("c", Arc::new(StaticReply::new("4"))),
        );
        assert_eq!(replaced, vec!["a".to_string()]);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(table.len(), 3);
    }
}
