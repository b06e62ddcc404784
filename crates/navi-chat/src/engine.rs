//! Top-level resolution: matcher, then context, then default help.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::context::ContextResolver;
use crate::error::KnowledgeError;
use crate::knowledge::KnowledgeBase;
use crate::matcher::TopicMatcher;
use crate::response::AnswerRenderer;
use crate::types::{ChatReply, ChatRequest};

/// Stateless chat engine over a shared, read-only catalog.
///
/// Safe to call from any number of request handlers at once: nothing is
/// mutated after construction.
pub struct ChatEngine {
    knowledge: Arc<KnowledgeBase>,
    matcher: TopicMatcher,
    context: ContextResolver,
    renderer: AnswerRenderer,
}

impl ChatEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            matcher: TopicMatcher::new(Arc::clone(&knowledge)),
            context: ContextResolver::new(Arc::clone(&knowledge)),
            renderer: AnswerRenderer::new(Arc::clone(&knowledge)),
            knowledge,
        }
    }

    /// Engine over the built-in catalog.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Ok(Self::new(Arc::new(KnowledgeBase::builtin()?)))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Answer one turn. Never fails: anything unresolvable ends in the
    /// default help with no topic.
    pub fn find_best_answer(&self, request: &ChatRequest) -> ChatReply {
        trace!(utterance = %request.utterance, "Resolving message");

        let matched = self.matcher.resolve(&request.utterance);
        let topic = self.context.resolve(
            matched.map(|m| m.topic),
            request.context_topic_id.as_deref(),
        );

        let Some(topic) = topic else {
            debug!(language = %request.language, via = "default", "No topic resolved");
            return ChatReply {
                reply: self.renderer.default_help(request.language),
                topic_id: None,
            };
        };

        let via = matched.map_or("context", |m| m.source.as_str());
        debug!(topic_id = %topic.id, language = %request.language, via, "Resolved topic");

        ChatReply {
            reply: self
                .renderer
                .render(topic, request.language, &request.utterance),
            topic_id: Some(topic.id.clone()),
        }
    }
}
