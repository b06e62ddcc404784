//! Topic resolution engine for NaviSenpai.
//!
//! Maps one user message, a reply language, and the topic id from the
//! previous turn onto a single knowledge-base entry and the stored answer
//! text to show. The engine is pure: no I/O, no session state, no locks.

pub mod context;
pub mod engine;
pub mod error;
pub mod hours;
pub mod knowledge;
pub mod matcher;
pub mod normalize;
pub mod response;
pub mod types;

pub use context::ContextResolver;
pub use engine::ChatEngine;
pub use error::KnowledgeError;
pub use hours::is_hours_question;
pub use knowledge::KnowledgeBase;
pub use matcher::{MatchSource, TopicMatch, TopicMatcher};
pub use normalize::normalize;
pub use response::AnswerRenderer;
pub use types::{ChatReply, ChatRequest};
