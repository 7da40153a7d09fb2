// File: src/conversation.rs
use crate::core::engine::MentorEngine;
use crate::core::types::{ConversationTurn, DEFAULT_LANGUAGE};
use tracing::debug;

/// The chat transcript. Owned by the caller, append-only, in memory only.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the mentor's greeting as the first assistant turn.
    pub fn with_greeting(engine: &MentorEngine) -> Self {
        let mut conversation = Self::new();
        conversation.turns.push(ConversationTurn::assistant(
            engine.greeting(DEFAULT_LANGUAGE),
            DEFAULT_LANGUAGE,
        ));
        conversation
    }

    /// Records a user message and the mentor's reply to it.
    ///
    /// Blank input is ignored and `None` is returned. Otherwise two turns are
    /// appended (user, then assistant), both tagged with `language`, and the
    /// assistant turn is returned.
    pub fn submit(
        &mut self,
        engine: &MentorEngine,
        input: &str,
        language: &str,
    ) -> Option<&ConversationTurn> {
        if input.trim().is_empty() {
            return None;
        }

        let reply = engine.select_response(input, language);
        debug!(
            language,
            topic = engine.select_topic(input).map(|r| r.topic()).unwrap_or("fallback"),
            "mentor reply"
        );

        self.turns.push(ConversationTurn::user(input, language));
        self.turns.push(ConversationTurn::assistant(reply, language));
        self.turns.last()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn reset(&mut self) {
        self.turns.clear();
    }
}
