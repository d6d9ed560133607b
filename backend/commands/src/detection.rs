/// Trigger detection: decide whether an inbound message is aimed at the bot.
use bento_core::{strip_mention, BotIdentity, ChatUser};

/// The parsed intent of a message: a command token and whether the bot was
/// addressed by mention. The default value means "not a trigger".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trigger {
    pub token: String,
    pub tagged: bool,
}

impl Trigger {
    pub fn new(token: impl Into<String>, tagged: bool) -> Self {
        Self {
            token: token.into(),
            tagged,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.token.is_empty() && !self.tagged
    }
}

/// Classify `text` as a prefixed command, a mention, or neither.
///
/// The prefix form wins when both are present. A mention with nothing after
/// it yields an empty token that is still tagged.
pub fn resolve_trigger(
    text: &str,
    mentions: &[ChatUser],
    bot: &BotIdentity,
    prefix: &str,
) -> Trigger {
    if !prefix.is_empty() && text.starts_with(prefix) {
        let first = text.split_whitespace().next().unwrap_or("");
        let token = first.strip_prefix(prefix).unwrap_or(first);
        return Trigger::new(token, false);
    }

    if mentions.iter().any(|u| bot.is(u)) {
        let cleaned = strip_mention(text, &bot.id);
        let token = cleaned.split_whitespace().next().unwrap_or("");
        return Trigger::new(token, true);
    }

    Trigger::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot() -> BotIdentity {
        BotIdentity::new("123")
    }

    fn me() -> ChatUser {
        ChatUser::bot("123", "Bento")
    }

    #[test]
    fn prefixed_command() {
        assert_eq!(resolve_trigger(".help", &[], &bot(), "."), Trigger::new("help", false));
    }

    #[test]
    fn prefixed_command_ignores_arguments() {
        assert_eq!(
            resolve_trigger(".roll 2d6 please", &[], &bot(), "."),
            Trigger::new("roll", false)
        );
    }

    #[test]
    fn mention_takes_first_word_after_tag() {
        assert_eq!(
            resolve_trigger("<@123> ping extra", &[me()], &bot(), "."),
            Trigger::new("ping", true)
        );
    }

    #[test]
    fn nickname_mention_form_is_stripped() {
        assert_eq!(
            resolve_trigger("<@!123> ping", &[me()], &bot(), "."),
            Trigger::new("ping", true)
        );
    }

    #[test]
    fn mention_in_the_middle_of_text() {
        assert_eq!(
            resolve_trigger("hey <@123> what's up", &[me()], &bot(), "."),
            Trigger::new("hey", true)
        );
    }

    #[test]
    fn plain_text_is_not_a_trigger() {
        let t = resolve_trigger("hello world", &[], &bot(), ".");
        assert_eq!(t, Trigger::none());
        assert!(t.is_none());
    }

    #[test]
    fn mention_of_someone_else_is_not_a_trigger() {
        let other = ChatUser::new("456", "someone");
        assert!(resolve_trigger("<@456> ping", &[other], &bot(), ".").is_none());
    }

    #[test]
    fn bare_mention_yields_empty_tagged_token() {
        assert_eq!(
            resolve_trigger("<@123>", &[me()], &bot(), "."),
            Trigger::new("", true)
        );
    }

    #[test]
    fn bare_prefix_yields_empty_token() {
        assert_eq!(resolve_trigger(".", &[], &bot(), "."), Trigger::none());
    }

    #[test]
    fn prefix_wins_over_mention() {
        assert_eq!(
            resolve_trigger(".ping <@123>", &[me()], &bot(), "."),
            Trigger::new("ping", false)
        );
    }

    #[test]
    fn multi_character_prefix() {
        assert_eq!(
            resolve_trigger("b!ping", &[], &bot(), "b!"),
            Trigger::new("ping", false)
        );
    }
}
