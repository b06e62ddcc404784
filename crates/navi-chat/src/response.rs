//! Answer rendering.
//!
//! Picks which stored text to return for a resolved topic: the short
//! `mini` variant for work-hour questions on `part_time_work`, otherwise
//! the full answer, in the requested language with English as fallback.

use std::sync::Arc;

use navi_core::types::{Language, Topic};

use crate::hours::is_hours_question;
use crate::knowledge::KnowledgeBase;
use crate::matcher::HOURS_TOPIC_ID;

/// Selects reply text for topics and the default help.
pub struct AnswerRenderer {
    knowledge: Arc<KnowledgeBase>,
}

impl AnswerRenderer {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Text to show for `topic`, given the raw message that led to it.
    pub fn render(&self, topic: &Topic, language: Language, utterance: &str) -> String {
        if topic.id == HOURS_TOPIC_ID && is_hours_question(utterance) {
            if let Some(text) = topic.mini.as_ref().and_then(|m| m.get_or_english(language)) {
                return text.to_string();
            }
        }

        match topic.answer.get_or_english(language) {
            Some(text) => text.to_string(),
            None => self.default_help(language),
        }
    }

    /// Generic help listing what the assistant can answer.
    pub fn default_help(&self, language: Language) -> String {
        self.knowledge
            .help()
            .get_or_english(language)
            .unwrap_or_default()
            .to_string()
    }
}
