//! Route handler functions for all API endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use navi_chat::ChatRequest;
use navi_core::types::Language;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

/// Body of `POST /api/chat`.
///
/// Every field is optional and anything that is not a string counts as
/// absent, so a sloppy client still gets the help text instead of an error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub context_topic_id: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseBody {
    pub reply: String,
    /// Language code as sent by the client, `"en"` when absent.
    pub language: String,
    /// Echo this back as `contextTopicId` on the next turn.
    pub topic_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub started_at: DateTime<Utc>,
    pub topic_count: usize,
}

// =============================================================================
// Handler functions
// =============================================================================

/// POST /api/chat - answer one conversational turn.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatResponseBody>, ApiError> {
    let Json(body) = payload?;

    let language = body
        .language
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| "en".to_string());

    let request = ChatRequest {
        utterance: body.message.unwrap_or_default(),
        language: Language::from_code(Some(language.as_str())),
        context_topic_id: body.context_topic_id.filter(|id| !id.is_empty()),
    };

    let reply = state.engine.find_best_answer(&request);

    Ok(Json(ChatResponseBody {
        reply: reply.reply,
        language,
        topic_id: reply.topic_id,
    }))
}

/// GET /api/topics - topic ids in match precedence order.
pub async fn topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    let topics: Vec<String> = state
        .engine
        .knowledge()
        .topic_ids()
        .map(str::to_string)
        .collect();
    let count = topics.len();
    Json(TopicsResponse { topics, count })
}

/// GET /health - liveness and catalog size.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        started_at: state.started_at,
        topic_count: state.engine.knowledge().len(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such endpoint".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_body_all_fields() {
        let body: ChatBody = serde_json::from_str(
            r#"{"message":"sim","language":"jp","contextTopicId":"housing"}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("sim"));
        assert_eq!(body.language.as_deref(), Some("jp"));
        assert_eq!(body.context_topic_id.as_deref(), Some("housing"));
    }

    #[test]
    fn test_chat_body_missing_fields() {
        let body: ChatBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
        assert!(body.language.is_none());
        assert!(body.context_topic_id.is_none());
    }

    #[test]
    fn test_chat_body_non_string_fields_are_absent() {
        let body: ChatBody = serde_json::from_str(
            r#"{"message":42,"language":["jp"],"contextTopicId":null}"#,
        )
        .unwrap();
        assert!(body.message.is_none());
        assert!(body.language.is_none());
        assert!(body.context_topic_id.is_none());
    }

    #[test]
    fn test_chat_body_ignores_unknown_fields() {
        let body: ChatBody =
            serde_json::from_str(r#"{"message":"hi","userId":"u1"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_chat_response_body_camel_case() {
        let body = ChatResponseBody {
            reply: "r".into(),
            language: "en".into(),
            topic_id: Some("sim_card".into()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["topicId"], "sim_card");
        assert_eq!(json["language"], "en");
    }
}
