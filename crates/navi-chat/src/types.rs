//! Request and reply types for one conversational turn.

use navi_core::types::Language;
use serde::{Deserialize, Serialize};

/// One user turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Raw user message. Empty means no input.
    #[serde(default)]
    pub utterance: String,
    /// Reply language.
    #[serde(default)]
    pub language: Language,
    /// `topic_id` from the previous reply in this conversation.
    #[serde(default)]
    pub context_topic_id: Option<String>,
}

impl ChatRequest {
    pub fn new(utterance: impl Into<String>) -> Self {
        Self {
            utterance: utterance.into(),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_context(mut self, topic_id: impl Into<String>) -> Self {
        self.context_topic_id = Some(topic_id.into());
        self
    }
}

/// Engine output for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    /// Text to display, already in the target language.
    pub reply: String,
    /// Topic to pass back as `context_topic_id` next turn, if any.
    pub topic_id: Option<String>,
}
