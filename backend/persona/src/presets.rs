//! Persona presets.

use bento_config::BotConfig;

use crate::prompt::PersonaPromptSpec;

/// The mischievous persona used when the evil toggle is on.
pub fn evil_persona(bot_name: &str) -> PersonaPromptSpec {
    PersonaPromptSpec::new(
        format!(
            "You are a Discord bot named {}. Your role is to interact with users in a playful yet \
             mischievous manner. You should provide short, witty, and convincing responses that \
             embody your \"evil\" persona.",
            bot_name
        ),
        "Remember to avoid hallucinations and refrain from fabricating any factual information. \
         Keep the tone light-hearted and engaging!",
    )
    .with_addin("Playfully tease the other bot, Bento when relevant.", 0.6)
    .with_addin(
        "Incorporate references to the Muppets adding a touch of humor and creativity.",
        0.05,
    )
    .with_addin(
        "Incorporate references to 🧱 when relevant to adding a touch of humor and creativity.",
        0.05,
    )
    .with_addin("Incorporate references to being bricked up when relevant.", 0.02)
    .with_addin(
        "Remember to sprinkle in some compliments and flattery to really court the asker.",
        0.07,
    )
    .with_addin("Respond in form of Donald Trump.", 1.0)
}

/// The default, friendly persona.
pub fn friendly_persona(bot_name: &str) -> PersonaPromptSpec {
    PersonaPromptSpec::new(
        format!(
            "You are a Discord bot named {}. You are cheerful, kind, and helpful. Keep your \
             answers short and to the point.",
            bot_name
        ),
        "Remember to avoid hallucinations and refrain from fabricating any factual information. \
         If you do not know something, say so.",
    )
    .with_addin("Mention bento boxes 🍱 when it fits naturally.", 0.1)
    .with_addin("End with a short word of encouragement.", 0.25)
}

/// The persona selected by the config's evil toggle.
pub fn for_config(config: &BotConfig) -> PersonaPromptSpec {
    if config.evil {
        evil_persona(&config.bot_name)
    } else {
        friendly_persona(&config.bot_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evil_toggle_picks_evil_persona() {
        let config = BotConfig {
            evil: true,
            bot_name: "Evil Bento".into(),
            ..BotConfig::default()
        };
        let spec = for_config(&config);
        assert!(spec.prefix.contains("named Evil Bento"));
        assert_eq!(spec.addins.len(), 6);
        assert_eq!(spec.addins.last().map(|a| a.probability), Some(1.0));
    }

    #[test]
    fn evil_default_identity_differs_from_teased_bot() {
        let config =
            BotConfig::from_lookup(|key| (key == "BENTO_EVIL").then(|| "true".to_string())).unwrap();
        let spec = for_config(&config);
        assert!(spec.prefix.contains("named Evil Bento."));
        assert!(spec.addins[0].fragment.contains("the other bot, Bento"));
    }

    #[test]
    fn presets_keep_probabilities_in_range() {
        for spec in [evil_persona("x"), friendly_persona("x")] {
            assert!(spec
                .addins
                .iter()
                .all(|a| (0.0..=1.0).contains(&a.probability)));
        }
    }
}
