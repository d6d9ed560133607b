use serde::{Deserialize, Serialize};

/// An optional persona fragment and the chance it is included.
///
/// `probability <= 0.0` never includes the fragment; `>= 1.0` always does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaAddin {
    pub fragment: String,
    pub probability: f64,
}

impl PersonaAddin {
    pub fn new(fragment: impl Into<String>, probability: f64) -> Self {
        Self {
            fragment: fragment.into(),
            probability,
        }
    }
}

/// Building blocks of a persona system prompt. Addins are evaluated in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaPromptSpec {
    pub prefix: String,
    pub postfix: String,
    #[serde(default)]
    pub addins: Vec<PersonaAddin>,
}

impl PersonaPromptSpec {
    pub fn new(prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            postfix: postfix.into(),
            addins: Vec::new(),
        }
    }

    pub fn with_addin(mut self, fragment: impl Into<String>, probability: f64) -> Self {
        self.addins.push(PersonaAddin::new(fragment, probability));
        self
    }
}
