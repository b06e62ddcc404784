//! Error types for knowledge base loading.
//!
//! Answering a message never fails; these errors only come out of building
//! a [`crate::KnowledgeBase`].

use navi_core::error::NaviError;

/// Errors raised while loading or validating a topic catalog.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse knowledge base: {0}")]
    Parse(String),
    #[error("topic #{0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate topic id: {0}")]
    DuplicateTopic(String),
    #[error("topic {0} has no keywords")]
    NoKeywords(String),
    #[error("topic {0} has an empty keyword")]
    EmptyKeyword(String),
    #[error("topic {0} has no English answer")]
    MissingEnglishAnswer(String),
    #[error("help text has no English variant")]
    MissingHelpText,
}

impl From<toml::de::Error> for KnowledgeError {
    fn from(err: toml::de::Error) -> Self {
        KnowledgeError::Parse(err.to_string())
    }
}

impl From<KnowledgeError> for NaviError {
    fn from(err: KnowledgeError) -> Self {
        NaviError::KnowledgeBase(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_error_display() {
        let cases: Vec<(KnowledgeError, &str)> = vec![
            (
                KnowledgeError::Parse("expected `=`".to_string()),
                "failed to parse knowledge base: expected `=`",
            ),
            (KnowledgeError::EmptyId(3), "topic #3 has an empty id"),
            (
                KnowledgeError::DuplicateTopic("sim_card".to_string()),
                "duplicate topic id: sim_card",
            ),
            (
                KnowledgeError::NoKeywords("taxes".to_string()),
                "topic taxes has no keywords",
            ),
            (
                KnowledgeError::EmptyKeyword("taxes".to_string()),
                "topic taxes has an empty keyword",
            ),
            (
                KnowledgeError::MissingEnglishAnswer("housing".to_string()),
                "topic housing has no English answer",
            ),
            (
                KnowledgeError::MissingHelpText,
                "help text has no English variant",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_knowledge_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: KnowledgeError = io_err.into();
        assert!(matches!(err, KnowledgeError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_knowledge_error_into_navi_error() {
        let err = KnowledgeError::DuplicateTopic("housing".to_string());
        let navi: NaviError = err.into();
        assert!(matches!(navi, NaviError::KnowledgeBase(_)));
        assert_eq!(
            navi.to_string(),
            "Knowledge base error: duplicate topic id: housing"
        );
    }
}
