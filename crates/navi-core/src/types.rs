use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Language
// =============================================================================

/// Reply language requested by the caller.
///
/// Only Japanese has to be asked for explicitly; every other code,
/// including a missing one, selects English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (`en`), also the universal fallback.
    #[default]
    En,
    /// Japanese (`jp`).
    Jp,
}

impl Language {
    /// Map a raw language code onto a supported language.
    ///
    /// Exactly `"jp"` selects Japanese. The match is case-sensitive.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("jp") => Language::Jp,
            _ => Language::En,
        }
    }

    /// The code used as the key in [`LocalizedText`].
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Jp => "jp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(Language::from_code(code.as_deref()))
    }
}

// =============================================================================
// LocalizedText
// =============================================================================

/// Text keyed by language code (`en`, `jp`, ...).
///
/// Codes the engine never selects are kept so that catalogs can carry
/// extra translations without failing to load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(code.into(), text.into());
        self
    }

    /// The exact variant for `language`, if present.
    pub fn get(&self, language: Language) -> Option<&str> {
        self.get_code(language.code())
    }

    /// The variant stored under an arbitrary code.
    pub fn get_code(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// The English variant.
    pub fn english(&self) -> Option<&str> {
        self.get(Language::En)
    }

    /// The variant for `language`, falling back to English.
    pub fn get_or_english(&self, language: Language) -> Option<&str> {
        self.get(language).or_else(|| self.english())
    }

    /// Language codes present, in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// =============================================================================
// Topic
// =============================================================================

/// One support subject in the knowledge base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable identifier, echoed to the caller as the context token.
    pub id: String,
    /// Trigger phrases, tested as case-insensitive substrings in order.
    pub keywords: Vec<String>,
    /// Full-length answer per language. `en` is mandatory.
    pub answer: LocalizedText,
    /// Short answer used for the work-hours shortcut.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini: Option<LocalizedText>,
}

impl Topic {
    pub fn new<I, S>(id: impl Into<String>, keywords: I, answer: LocalizedText) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            answer,
            mini: None,
        }
    }

    pub fn with_mini(mut self, mini: LocalizedText) -> Self {
        self.mini = Some(mini);
        self
    }
}
