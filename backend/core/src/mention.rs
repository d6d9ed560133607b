//! Platform mention tokens.
//!
//! Discord renders a user mention as `<@ID>`; older clients and nickname
//! mentions use `<@!ID>`. Both forms address the same user.

/// The canonical mention token for a user id.
pub fn mention_tag(user_id: &str) -> String {
    format!("<@{}>", user_id)
}

fn nickname_tag(user_id: &str) -> String {
    format!("<@!{}>", user_id)
}

/// Replace every mention of `user_id` in `text` with `replacement`.
pub fn replace_mention(text: &str, user_id: &str, replacement: &str) -> String {
    text.replace(&nickname_tag(user_id), replacement)
        .replace(&mention_tag(user_id), replacement)
}

/// Remove every mention of `user_id` from `text`.
pub fn strip_mention(text: &str, user_id: &str) -> String {
    replace_mention(text, user_id, "")
}
