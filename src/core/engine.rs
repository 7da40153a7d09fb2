use crate::core::content;
use crate::core::localized::LocalizedText;
use crate::core::rules::{RuleSet, TopicRule};
use crate::error::Result;
use crate::persistence::{load_rules_from_disk, load_rules_from_json, save_rules_to_disk};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

// The mentor engine: an immutable rule set plus the texts the chat shows
// around it. Cheap to share; nothing in here changes after construction.
#[derive(Debug, Clone)]
pub struct MentorEngine {
    rules: RuleSet,
    greeting: LocalizedText,
    quick_questions: Vec<LocalizedText>,
}

impl MentorEngine {
    pub fn new() -> Self {
        Self::with_rules(content::builtin_rules())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            greeting: content::greeting(),
            quick_questions: content::quick_questions(),
        }
    }

    /// Loads a rule pack (JSON for `.json` files, binary otherwise) and
    /// falls back to the built-in rules when it cannot be read.
    pub fn from_file_or_builtin(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(engine) => {
                info!(path = %path.display(), topics = engine.rules.rules().len(), "loaded rule pack");
                engine
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using built-in rules");
                Self::new()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let rules = if is_json {
            load_rules_from_json(path)?
        } else {
            load_rules_from_disk(path)?
        };
        Ok(Self::with_rules(rules))
    }

    /// Picks the canned answer for `user_text` in `language`.
    ///
    /// Topics are tried in priority order and the first one with a keyword
    /// contained in the lowercased text wins. A topic without a translation
    /// for `language` answers in the default language; when nothing matches
    /// the generic fallback is returned. Never fails and never returns an
    /// empty string.
    pub fn select_response(&self, user_text: &str, language: &str) -> &str {
        match self.select_topic(user_text) {
            Some(rule) => rule.response(language),
            None => self.rules.fallback().resolve(language),
        }
    }

    pub fn select_topic(&self, user_text: &str) -> Option<&TopicRule> {
        self.rules.first_match(user_text)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn greeting(&self, language: &str) -> &str {
        self.greeting.resolve(language)
    }

    pub fn quick_questions(&self, language: &str) -> Vec<&str> {
        self.quick_questions
            .iter()
            .map(|q| q.resolve(language))
            .collect()
    }

    pub fn save_rules(&self, path: &Path) -> Result<()> {
        save_rules_to_disk(&self.rules, path)
    }
}

impl Default for MentorEngine {
    fn default() -> Self {
        Self::new()
    }
}

static BUILTIN: OnceLock<MentorEngine> = OnceLock::new();

/// The process-wide engine over the built-in rules.
pub fn builtin() -> &'static MentorEngine {
    BUILTIN.get_or_init(MentorEngine::new)
}

/// [`MentorEngine::select_response`] over the built-in rules.
pub fn select_response(user_text: &str, language: &str) -> &'static str {
    builtin().select_response(user_text, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{BUDGETING, CREDIT, DEBT, EMERGENCY_FUND, INVESTING, SAVING};

    fn topic_of(text: &str) -> Option<&'static str> {
        builtin().select_topic(text).map(|r| r.topic())
    }

    #[test]
    fn priority_order_is_fixed() {
        assert_eq!(topic_of("I want to save and budget"), Some(BUDGETING));
        assert_eq!(topic_of("save my credit"), Some(SAVING));
        assert_eq!(topic_of("credit for investment"), Some(CREDIT));
        assert_eq!(topic_of("invest or repay the loan"), Some(INVESTING));
        assert_eq!(topic_of("loan from the emergency"), Some(DEBT));
        assert_eq!(topic_of("emergency"), Some(EMERGENCY_FUND));
    }

    #[test]
    fn substring_match_has_no_word_boundaries() {
        assert_eq!(topic_of("budgeting101"), Some(BUDGETING));
        // "refund" contains "fund"
        assert_eq!(topic_of("where is my refund"), Some(EMERGENCY_FUND));
        assert_eq!(topic_of("unsaved"), Some(SAVING));
    }

    #[test]
    fn localization_gap_uses_default_language() {
        let engine = MentorEngine::new();
        let en = engine.select_response("invest", "en");
        assert_eq!(engine.select_response("invest", "hi"), en);
        assert_ne!(engine.select_response("invest", "es"), en);
    }

    #[test]
    fn free_function_matches_engine() {
        let engine = MentorEngine::new();
        assert_eq!(select_response("debt", "hi"), engine.select_response("debt", "hi"));
    }

    #[test]
    fn quick_questions_are_localized() {
        let engine = MentorEngine::new();
        assert_eq!(engine.quick_questions("hi").len(), 3);
        assert_eq!(engine.quick_questions("fr"), engine.quick_questions("en"));
        assert_eq!(engine.greeting("es"), engine.greeting("en"));
    }
}
