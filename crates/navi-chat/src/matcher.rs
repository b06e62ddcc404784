//! Topic matcher.
//!
//! Resolves a message to a topic through three tiers, first hit wins:
//!
//! 1. keyword scan over the catalog, in catalog and keyword order
//! 2. hours-question fallback to `part_time_work`
//! 3. hand-curated category substrings, each mapped to one topic id
//!
//! Matching is plain substring containment on the lower-cased message.
//! There are no word boundaries, so a short keyword can hit inside a longer
//! word ("sim" in "simple").

use std::sync::Arc;

use navi_core::types::Topic;
use serde::Serialize;

use crate::hours::is_hours_question;
use crate::knowledge::KnowledgeBase;
use crate::normalize::normalize;

/// Topic that answers work-hour questions.
pub const HOURS_TOPIC_ID: &str = "part_time_work";

// =============================================================================
// Category fallbacks
// =============================================================================

/// A fixed substring set routed to one topic.
#[derive(Debug)]
pub struct CategoryFallback {
    pub topic_id: &'static str,
    pub triggers: &'static [&'static str],
}

/// Tested in order after the keyword and hours tiers miss.
///
/// Some triggers repeat keywords of the same topic; they are kept as-is.
pub static CATEGORY_FALLBACKS: &[CategoryFallback] = &[
    // Address registration / city hall
    CategoryFallback {
        topic_id: "city_hall_registration",
        triggers: &[
            "address change",
            "change address",
            "転入届",
            "転居届",
            "住民票",
            "juminhyo",
            "city hall",
            "市役所",
        ],
    },
    // SIM / phone contract
    CategoryFallback {
        topic_id: "sim_card",
        triggers: &[
            "sim",
            "sim card",
            "phone number",
            "携帯",
            "携帯契約",
            "mobile plan",
            "データプラン",
        ],
    },
    // Disaster / evacuation
    CategoryFallback {
        topic_id: "disaster_preparedness",
        triggers: &[
            "earthquake",
            "地震",
            "台風",
            "避難",
            "evacuation",
            "emergency bag",
            "防災バッグ",
            "disaster",
        ],
    },
];

// =============================================================================
// TopicMatch
// =============================================================================

/// Which tier produced a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Keyword,
    HoursFallback,
    CategoryFallback,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSource::Keyword => "keyword",
            MatchSource::HoursFallback => "hours_fallback",
            MatchSource::CategoryFallback => "category_fallback",
        }
    }
}

/// A matched topic and the tier that found it.
#[derive(Clone, Copy, Debug)]
pub struct TopicMatch<'a> {
    pub topic: &'a Topic,
    pub source: MatchSource,
}

// =============================================================================
// TopicMatcher
// =============================================================================

/// Tiered substring matcher over a [`KnowledgeBase`].
pub struct TopicMatcher {
    knowledge: Arc<KnowledgeBase>,
    /// Lower-cased keywords, parallel to `knowledge.topics()`.
    keywords: Vec<Vec<String>>,
}

impl TopicMatcher {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        let keywords = knowledge
            .topics()
            .iter()
            .map(|t| t.keywords.iter().map(|k| k.to_lowercase()).collect())
            .collect();
        Self {
            knowledge,
            keywords,
        }
    }

    /// Resolve a raw message to a topic. Empty input yields `None`.
    pub fn match_topic(&self, utterance: &str) -> Option<&Topic> {
        self.resolve(utterance).map(|m| m.topic)
    }

    /// Like [`match_topic`](Self::match_topic), also reporting the tier.
    pub fn resolve(&self, utterance: &str) -> Option<TopicMatch<'_>> {
        let message = normalize(utterance)?;

        self.keyword_tier(&message)
            .or_else(|| self.hours_tier(&message))
            .or_else(|| self.category_tier(&message))
    }

    fn keyword_tier(&self, message: &str) -> Option<TopicMatch<'_>> {
        self.knowledge
            .topics()
            .iter()
            .zip(&self.keywords)
            .find(|(_, keywords)| keywords.iter().any(|k| message.contains(k.as_str())))
            .map(|(topic, _)| TopicMatch {
                topic,
                source: MatchSource::Keyword,
            })
    }

    fn hours_tier(&self, message: &str) -> Option<TopicMatch<'_>> {
        if !is_hours_question(message) {
            return None;
        }
        self.knowledge.find(HOURS_TOPIC_ID).map(|topic| TopicMatch {
            topic,
            source: MatchSource::HoursFallback,
        })
    }

    fn category_tier(&self, message: &str) -> Option<TopicMatch<'_>> {
        CATEGORY_FALLBACKS
            .iter()
            .filter(|category| category.triggers.iter().any(|t| message.contains(t)))
            .find_map(|category| self.knowledge.find(category.topic_id))
            .map(|topic| TopicMatch {
                topic,
                source: MatchSource::CategoryFallback,
            })
    }
}
