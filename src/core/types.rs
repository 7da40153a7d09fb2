// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A language code such as "en", "es" or "hi".
/// Any string is accepted; codes without a translation resolve to the default.
pub type LanguageCode = String;

/// Identifier of an advice topic, e.g. "budgeting".
pub type TopicId = String;

/// The language every localized text is guaranteed to carry.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages the built-in content is written for, in selector order.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["en", "es", "hi"];

/// Returns true when `code` is one of the built-in languages.
pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    /// The language selected when the turn was produced.
    pub language: LanguageCode,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), language: language.into() }
    }

    pub fn assistant(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), language: language.into() }
    }
}
