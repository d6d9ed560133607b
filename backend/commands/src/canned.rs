//! Fixed replies that bypass the generative provider.

/// Sent to every tagged message while protest mode is on.
pub const PROTEST_MESSAGE: &str = "Even a villain like me can't help but miss that goody-two-shoes, \
Bento. His annoying optimism and relentless kindness were a constant challenge, but deep down, I \
respected him. Without him around, the chaos feels a little... empty. Guess I'll just have to find \
new ways to stir up trouble in his absence. Until Bento comes back online, I'm going on strike! No \
more chaos or villainy from me. This bot is protesting for Bento's return!";

/// Sent instead of a generated reply when another bot tags us.
pub const BOT_FREELOADING: &[&str] = &[
    "Nice try, bot. Get your own tokens.",
    "I don't do free labour for other bots.",
    "Ask your own language model, you freeloader.",
    "Bots talking to bots? Not on my watch.",
    "My answers are for humans. Beep boop, go away.",
];
