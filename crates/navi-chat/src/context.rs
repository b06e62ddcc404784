//! Cross-turn context resolution.
//!
//! The engine keeps no sessions. Follow-up questions ("and how do I apply
//! for that?") resolve against the topic id the caller got back on the
//! previous turn and passes in again.

use std::sync::Arc;

use navi_core::types::Topic;

use crate::knowledge::KnowledgeBase;

/// Falls back to the previous turn's topic when a message matches nothing.
pub struct ContextResolver {
    knowledge: Arc<KnowledgeBase>,
}

impl ContextResolver {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// A fresh match always wins over context. Otherwise a non-empty
    /// `context_topic_id` is looked up by exact id; unknown ids behave like
    /// no context at all.
    pub fn resolve<'a>(
        &'a self,
        matched: Option<&'a Topic>,
        context_topic_id: Option<&str>,
    ) -> Option<&'a Topic> {
        if matched.is_some() {
            return matched;
        }
        context_topic_id
            .filter(|id| !id.is_empty())
            .and_then(|id| self.knowledge.find(id))
    }
}
