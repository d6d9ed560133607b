//! Persona prompt composition.
//!
//! The prompt is `prefix`, then each addin whose draw lands under its
//! probability, then `postfix`, then a clause naming the addressed user by
//! mention token, joined with single spaces.

use bento_core::{mention_tag, DrawSource};

use crate::prompt::PersonaPromptSpec;

/// Compose a system prompt for a reply addressed to `user_id`.
///
/// Takes exactly one draw per addin, in order, whatever its probability.
pub fn compose(spec: &PersonaPromptSpec, user_id: &str, draws: &dyn DrawSource) -> String {
    let mut parts: Vec<&str> = vec![spec.prefix.as_str()];

    for addin in &spec.addins {
        if draws.draw() < addin.probability {
            parts.push(&addin.fragment);
        }
    }

    parts.push(&spec.postfix);

    let addressee = format!(
        "You can refer to the user asking the question with the string '{}'.",
        mention_tag(user_id)
    );
    parts.push(&addressee);

    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
