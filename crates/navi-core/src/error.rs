use thiserror::Error;

/// Top-level error type for NaviSenpai.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for NaviError` so that `?` works across crate
/// boundaries. None of these are produced while answering a message; they
/// only surface during startup (config, catalog) or while serving.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NaviError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for NaviError {
    fn from(err: toml::de::Error) -> Self {
        NaviError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for NaviError {
    fn from(err: toml::ser::Error) -> Self {
        NaviError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NaviError {
    fn from(err: serde_json::Error) -> Self {
        NaviError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for NaviSenpai operations.
pub type Result<T> = std::result::Result<T, NaviError>;
