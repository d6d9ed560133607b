use serde::{Deserialize, Serialize};

/// A chat user as seen by the gateway (author or mention).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
    /// True when the account is itself a bot.
    #[serde(default)]
    pub bot: bool,
}

impl ChatUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bot: false,
        }
    }

    pub fn bot(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bot: true,
            ..Self::new(id, name)
        }
    }
}

/// The bot's own identity, learned from the gateway once the session is ready.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub id: String,
}

impl BotIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn is(&self, user: &ChatUser) -> bool {
        self.id == user.id
    }
}

/// Points a reply at the message that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub channel_id: String,
    pub message_id: String,
}

/// A message-create event delivered by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub id: String,
    pub channel_id: String,
    pub content: String,
    pub author: ChatUser,
    #[serde(default)]
    pub mentions: Vec<ChatUser>,
}

impl InboundMessage {
    pub fn new(
        id: impl Into<String>,
        channel_id: impl Into<String>,
        author: ChatUser,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            content: content.into(),
            author,
            mentions: Vec::new(),
        }
    }

    pub fn with_mention(mut self, user: ChatUser) -> Self {
        self.mentions.push(user);
        self
    }

    /// Reference used when replying to this message.
    pub fn reference(&self) -> MessageRef {
        MessageRef {
            channel_id: self.channel_id.clone(),
            message_id: self.id.clone(),
        }
    }
}

/// A reaction-add event delivered by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub channel_id: String,
    pub message_id: String,
    pub user_id: String,
    pub emoji: String,
}
