//! Log Redaction
//!
//! Scrubs provider keys, bearer tokens, and Discord bot tokens from text before
//! it reaches a log line. User messages and composed prompts pass through here.

use regex::Regex;
use std::sync::LazyLock;

static SECRET_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"sk-ant-[A-Za-z0-9_\-]{16,}", "[REDACTED_KEY]"),
        (r"sk-[A-Za-z0-9]{32,}", "[REDACTED_KEY]"),
        (r"Bearer\s+[A-Za-z0-9\-\._~+/]+=*", "[REDACTED_TOKEN]"),
        (r"Bot\s+[A-Za-z0-9\-\._]{50,}", "[REDACTED_TOKEN]"),
        (r"[MNO][A-Za-z0-9_\-]{23,27}\.[A-Za-z0-9_\-]{6}\.[A-Za-z0-9_\-]{27,}", "[REDACTED_TOKEN]"),
    ]
    .into_iter()
    .filter_map(|(pattern, label)| Regex::new(pattern).ok().map(|re| (re, label)))
    .collect()
});

/// Redacts secret-looking substrings in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    SECRET_PATTERNS
        .iter()
        .fold(input.to_string(), |text, (re, label)| {
            re.replace_all(&text, *label).into_owned()
        })
}
