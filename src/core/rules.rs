// File: src/core/rules.rs
use crate::core::localized::LocalizedText;
use crate::core::types::TopicId;
use crate::error::MentorError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A topic with its keyword triggers and localized answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRule {
    topic: TopicId,
    /// Always lowercase. Matched as substrings of the lowercased input.
    keywords: Vec<String>,
    responses: LocalizedText,
}

impl TopicRule {
    pub fn new<I, K>(topic: impl Into<String>, keywords: I, responses: LocalizedText) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            topic: topic.into(),
            keywords: keywords.into_iter().map(|k| k.into().to_lowercase()).collect(),
            responses,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn responses(&self) -> &LocalizedText {
        &self.responses
    }

    /// The answer in `language`, or in the default language when this topic
    /// has no translation for it.
    pub fn response(&self, language: &str) -> &str {
        self.responses.resolve(language)
    }

    /// `normalized` must already be lowercased.
    /// Plain substring containment: "budgeting101" matches "budget".
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }

    fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("topic id must not be empty".to_string());
        }
        if self.keywords.is_empty() {
            return Err(format!("topic '{}' has no keywords", self.topic));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(format!("topic '{}' has an empty keyword", self.topic));
        }
        self.responses
            .validate()
            .map_err(|e| format!("topic '{}': {}", self.topic, e))
    }
}

/// Ordered topic rules plus the reply used when nothing matches.
/// Earlier rules take priority. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleSetData", into = "RuleSetData")]
pub struct RuleSet {
    rules: Vec<TopicRule>,
    fallback: LocalizedText,
}

/// Wire shape of a rule pack, checked by `RuleSet::new` on the way in.
#[derive(Serialize, Deserialize)]
struct RuleSetData {
    rules: Vec<TopicRule>,
    fallback: LocalizedText,
}

impl RuleSet {
    pub fn new(rules: Vec<TopicRule>, fallback: LocalizedText) -> Result<Self, MentorError> {
        // Deserialized rules skip TopicRule::new, so normalize here as well.
        let rules: Vec<TopicRule> = rules
            .into_iter()
            .map(|rule| TopicRule::new(rule.topic, rule.keywords, rule.responses))
            .collect();

        let mut seen = HashSet::new();
        for rule in &rules {
            rule.validate().map_err(MentorError::InvalidRuleSet)?;
            if !seen.insert(rule.topic.as_str()) {
                return Err(MentorError::InvalidRuleSet(format!(
                    "duplicate topic '{}'",
                    rule.topic
                )));
            }
        }
        fallback
            .validate()
            .map_err(|e| MentorError::InvalidRuleSet(format!("fallback: {e}")))?;

        Ok(Self { rules, fallback })
    }

    /// Skips validation. Only for the compiled-in tables, which are checked
    /// by unit tests instead.
    pub(crate) fn from_static(rules: Vec<TopicRule>, fallback: LocalizedText) -> Self {
        Self { rules, fallback }
    }

    /// The first rule, in priority order, with a keyword contained in
    /// `user_text` (case-insensitive).
    pub fn first_match(&self, user_text: &str) -> Option<&TopicRule> {
        let normalized = user_text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &LocalizedText {
        &self.fallback
    }

    pub fn topic(&self, id: &str) -> Option<&TopicRule> {
        self.rules.iter().find(|rule| rule.topic == id)
    }
}

impl TryFrom<RuleSetData> for RuleSet {
    type Error = MentorError;

    fn try_from(data: RuleSetData) -> Result<Self, Self::Error> {
        Self::new(data.rules, data.fallback)
    }
}

impl From<RuleSet> for RuleSetData {
    fn from(set: RuleSet) -> Self {
        Self { rules: set.rules, fallback: set.fallback }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(topic: &str, keywords: &[&str]) -> TopicRule {
        TopicRule::new(topic, keywords.iter().copied(), LocalizedText::new(topic.to_uppercase()))
    }

    fn sample() -> RuleSet {
        RuleSet::new(
            vec![rule("first", &["alpha", "beta"]), rule("second", &["beta", "Gamma"])],
            LocalizedText::new("nothing"),
        )
        .unwrap()
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        let set = sample();
        assert_eq!(set.first_match("beta").unwrap().topic(), "first");
        assert_eq!(set.first_match("gamma then alpha").unwrap().topic(), "first");
        assert_eq!(set.first_match("just gamma").unwrap().topic(), "second");
    }

    #[test]
    fn keywords_are_lowercased() {
        let set = sample();
        assert_eq!(set.topic("second").unwrap().keywords(), ["beta", "gamma"]);
        assert_eq!(set.first_match("GAMMA").unwrap().topic(), "second");
    }

    #[test]
    fn no_match_is_none() {
        assert!(sample().first_match("").is_none());
        assert!(sample().first_match("delta").is_none());
    }

    #[test]
    fn rejects_empty_keyword() {
        let err = RuleSet::new(vec![rule("x", &["ok", " "])], LocalizedText::new("f")).unwrap_err();
        assert!(matches!(err, MentorError::InvalidRuleSet(msg) if msg.contains("empty keyword")));
    }

    #[test]
    fn rejects_rule_without_keywords() {
        let err = RuleSet::new(vec![rule("x", &[])], LocalizedText::new("f")).unwrap_err();
        assert!(matches!(err, MentorError::InvalidRuleSet(msg) if msg.contains("no keywords")));
    }

    #[test]
    fn rejects_duplicate_topics() {
        let err = RuleSet::new(vec![rule("x", &["a"]), rule("x", &["b"])], LocalizedText::new("f"))
            .unwrap_err();
        assert!(matches!(err, MentorError::InvalidRuleSet(msg) if msg.contains("duplicate topic 'x'")));
    }

    #[test]
    fn rejects_empty_fallback() {
        let err = RuleSet::new(vec![], LocalizedText::new("")).unwrap_err();
        assert!(matches!(err, MentorError::InvalidRuleSet(msg) if msg.starts_with("fallback")));
    }

    #[test]
    fn json_pack_is_validated_and_normalized() {
        let json = r#"{
            "rules": [{"topic": "tax", "keywords": ["TAX"], "responses": {"en": "File early."}}],
            "fallback": {"en": "Ask me about taxes."}
        }"#;
        let set: RuleSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.first_match("taxes?").unwrap().response("hi"), "File early.");

        let bad = r#"{"rules": [{"topic": "tax", "keywords": [""], "responses": {"en": "x"}}],
                      "fallback": {"en": "y"}}"#;
        assert!(serde_json::from_str::<RuleSet>(bad).is_err());
    }
}
