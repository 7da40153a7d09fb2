//! Per-language text with a default-language fallback.
//!
//! Every `LocalizedText` that passes [`LocalizedText::validate`] (and every
//! one that was deserialized) holds a non-empty entry for
//! [`DEFAULT_LANGUAGE`], so [`LocalizedText::resolve`] always produces text.

use crate::core::types::{LanguageCode, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<LanguageCode, String>",
    into = "BTreeMap<LanguageCode, String>"
)]
pub struct LocalizedText {
    texts: BTreeMap<LanguageCode, String>,
}

impl LocalizedText {
    /// Creates a text whose only entry is the default-language one.
    pub fn new(default_text: impl Into<String>) -> Self {
        let mut texts = BTreeMap::new();
        texts.insert(DEFAULT_LANGUAGE.to_string(), default_text.into());
        Self { texts }
    }

    /// Adds (or replaces) the translation for `language`.
    pub fn with(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(language.into(), text.into());
        self
    }

    /// Text for `language`, or the default-language text when there is no
    /// translation. Unknown codes are not an error.
    pub fn resolve(&self, language: &str) -> &str {
        self.lookup(language)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE))
            .unwrap_or_default()
    }

    /// Whether a translation exists for exactly this code.
    pub fn has(&self, language: &str) -> bool {
        self.lookup(language).is_some()
    }

    /// Languages with an explicit translation, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.lookup(DEFAULT_LANGUAGE).is_none() {
            return Err(format!("missing '{DEFAULT_LANGUAGE}' text"));
        }
        if let Some((language, _)) = self.texts.iter().find(|(_, t)| t.trim().is_empty()) {
            return Err(format!("empty text for language '{language}'"));
        }
        Ok(())
    }

    fn lookup(&self, language: &str) -> Option<&str> {
        self.texts
            .get(language)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

impl TryFrom<BTreeMap<LanguageCode, String>> for LocalizedText {
    type Error = String;

    fn try_from(texts: BTreeMap<LanguageCode, String>) -> Result<Self, Self::Error> {
        let text = Self { texts };
        text.validate()?;
        Ok(text)
    }
}

impl From<LocalizedText> for BTreeMap<LanguageCode, String> {
    fn from(text: LocalizedText) -> Self {
        text.texts
    }
}
