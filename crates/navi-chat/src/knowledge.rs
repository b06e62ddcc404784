//! The topic catalog.
//!
//! An ordered, immutable list of [`Topic`] records plus the bilingual help
//! text. Catalog order is match precedence and is never changed after
//! loading.

use std::collections::HashSet;
use std::path::Path;

use navi_core::types::{LocalizedText, Topic};
use serde::Deserialize;
use tracing::info;

use crate::error::KnowledgeError;

/// Catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/knowledge_base.toml");

/// On-disk catalog shape: a `[help]` table and an ordered `[[topics]]` array.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    help: LocalizedText,
    #[serde(default)]
    topics: Vec<Topic>,
}

/// Read-only topic catalog.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
    help: LocalizedText,
}

impl KnowledgeBase {
    /// Build a catalog from topics in precedence order.
    ///
    /// Fails if an id is empty or repeated, a topic has no (or an empty)
    /// keyword, a topic lacks an English answer, or the help text lacks
    /// English.
    pub fn new(topics: Vec<Topic>, help: LocalizedText) -> Result<Self, KnowledgeError> {
        if help.english().is_none() {
            return Err(KnowledgeError::MissingHelpText);
        }

        let mut seen = HashSet::with_capacity(topics.len());
        for (position, topic) in topics.iter().enumerate() {
            if topic.id.is_empty() {
                return Err(KnowledgeError::EmptyId(position));
            }
            if !seen.insert(topic.id.as_str()) {
                return Err(KnowledgeError::DuplicateTopic(topic.id.clone()));
            }
            if topic.keywords.is_empty() {
                return Err(KnowledgeError::NoKeywords(topic.id.clone()));
            }
            // "" is a substring of every message and would shadow later topics.
            if topic.keywords.iter().any(|k| k.is_empty()) {
                return Err(KnowledgeError::EmptyKeyword(topic.id.clone()));
            }
            if topic.answer.english().is_none() {
                return Err(KnowledgeError::MissingEnglishAnswer(topic.id.clone()));
            }
        }

        Ok(Self { topics, help })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, KnowledgeError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.topics, file.help)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&content)?;
        info!(path = %path.display(), topics = kb.len(), "Knowledge base loaded");
        Ok(kb)
    }

    /// Look up a topic by exact id.
    pub fn find(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Catalog position of a topic id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.id == id)
    }

    /// All topics in precedence order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic_ids(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.id.as_str())
    }

    /// Generic help text returned when no topic can be resolved.
    pub fn help(&self) -> &LocalizedText {
        &self.help
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navi_core::types::Language;
    use std::io::Write;

    fn en(text: &str) -> LocalizedText {
        LocalizedText::new().with("en", text)
    }

    fn topic(id: &str, keywords: &[&str]) -> Topic {
        Topic::new(id, keywords.iter().copied(), en(&format!("{id} answer")))
    }

    // ---- Built-in catalog ----

    #[test]
    fn test_builtin_loads() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.len(), 24);
        assert!(!kb.is_empty());
    }

    #[test]
    fn test_builtin_order() {
        let kb = KnowledgeBase::builtin().unwrap();
        let ids: Vec<&str> = kb.topic_ids().collect();
        assert_eq!(ids.first(), Some(&"part_time_work"));
        assert_eq!(ids.get(1), Some(&"city_hall_registration"));
        assert_eq!(ids.last(), Some(&"disaster_preparedness"));
        assert_eq!(kb.position("sim_card"), Some(12));
    }

    #[test]
    fn test_builtin_every_topic_is_bilingual() {
        let kb = KnowledgeBase::builtin().unwrap();
        for topic in kb.topics() {
            assert!(topic.answer.get(Language::En).is_some(), "{}", topic.id);
            assert!(topic.answer.get(Language::Jp).is_some(), "{}", topic.id);
        }
    }

    #[test]
    fn test_builtin_only_part_time_work_has_mini() {
        let kb = KnowledgeBase::builtin().unwrap();
        let with_mini: Vec<&str> = kb
            .topics()
            .iter()
            .filter(|t| t.mini.is_some())
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(with_mini, vec!["part_time_work"]);

        let mini = kb.find("part_time_work").unwrap().mini.as_ref().unwrap();
        assert!(mini.get(Language::En).unwrap().starts_with("⌛ Work limit for students"));
        assert!(mini.get(Language::Jp).unwrap().starts_with("⌛ 留学生のバイト時間"));
    }

    #[test]
    fn test_builtin_help_text() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert!(kb.help().get(Language::En).unwrap().starts_with("🌸 I'm NaviSenpai."));
        assert!(kb.help().get(Language::Jp).unwrap().starts_with("🌸 ナビ先輩です。"));
    }

    #[test]
    fn test_builtin_multiline_text_has_no_leading_newline() {
        let kb = KnowledgeBase::builtin().unwrap();
        for topic in kb.topics() {
            for code in topic.answer.codes() {
                let text = topic.answer.get_code(code).unwrap();
                assert!(!text.starts_with('\n'), "{} {}", topic.id, code);
            }
        }
    }

    // ---- Lookups ----

    #[test]
    fn test_find_exact_id_only() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.find("sim_card").unwrap().id, "sim_card");
        assert!(kb.find("SIM_CARD").is_none());
        assert!(kb.find("sim").is_none());
        assert!(kb.find("").is_none());
    }

    // ---- Validation ----

    #[test]
    fn test_new_rejects_duplicate_id() {
        let result = KnowledgeBase::new(vec![topic("a", &["x"]), topic("a", &["y"])], en("help"));
        assert!(matches!(result, Err(KnowledgeError::DuplicateTopic(id)) if id == "a"));
    }

    #[test]
    fn test_new_rejects_empty_id() {
        let result = KnowledgeBase::new(vec![topic("a", &["x"]), topic("", &["y"])], en("help"));
        assert!(matches!(result, Err(KnowledgeError::EmptyId(1))));
    }

    #[test]
    fn test_new_rejects_missing_keywords() {
        let result = KnowledgeBase::new(vec![topic("a", &[])], en("help"));
        assert!(matches!(result, Err(KnowledgeError::NoKeywords(_))));
    }

    #[test]
    fn test_new_rejects_empty_keyword() {
        let result = KnowledgeBase::new(vec![topic("a", &["ok", ""])], en("help"));
        assert!(matches!(result, Err(KnowledgeError::EmptyKeyword(_))));
    }

    #[test]
    fn test_new_rejects_missing_english_answer() {
        let t = Topic::new("a", ["x"], LocalizedText::new().with("jp", "日本語だけ"));
        let result = KnowledgeBase::new(vec![t], en("help"));
        assert!(matches!(result, Err(KnowledgeError::MissingEnglishAnswer(id)) if id == "a"));
    }

    #[test]
    fn test_new_rejects_help_without_english() {
        let result = KnowledgeBase::new(vec![], LocalizedText::new().with("jp", "ヘルプ"));
        assert!(matches!(result, Err(KnowledgeError::MissingHelpText)));
    }

    #[test]
    fn test_new_allows_mini_without_english() {
        let t = topic("a", &["x"]).with_mini(LocalizedText::new().with("jp", "短い"));
        assert!(KnowledgeBase::new(vec![t], en("help")).is_ok());
    }

    #[test]
    fn test_new_allows_empty_catalog() {
        let kb = KnowledgeBase::new(vec![], en("help")).unwrap();
        assert!(kb.is_empty());
    }

    // ---- TOML parsing ----

    const SMALL_CATALOG: &str = r#"
[help]
en = "help"

[[topics]]
id = "second"
keywords = ["b"]

[topics.answer]
en = "B"

[[topics]]
id = "first"
keywords = ["a", "A phrase"]

[topics.answer]
en = '''
line one
line two'''
jp = "エー"

[topics.mini]
en = "a"
"#;

    #[test]
    fn test_from_toml_str_preserves_file_order() {
        let kb = KnowledgeBase::from_toml_str(SMALL_CATALOG).unwrap();
        assert_eq!(kb.topic_ids().collect::<Vec<_>>(), vec!["second", "first"]);
    }

    #[test]
    fn test_from_toml_str_reads_all_fields() {
        let kb = KnowledgeBase::from_toml_str(SMALL_CATALOG).unwrap();
        let first = kb.find("first").unwrap();
        assert_eq!(first.keywords, vec!["a", "A phrase"]);
        assert_eq!(first.answer.get(Language::En), Some("line one\nline two"));
        assert_eq!(first.answer.get(Language::Jp), Some("エー"));
        assert_eq!(first.mini.as_ref().unwrap().english(), Some("a"));
        assert!(kb.find("second").unwrap().mini.is_none());
    }

    #[test]
    fn test_from_toml_str_without_topics() {
        let kb = KnowledgeBase::from_toml_str("[help]\nen = \"help\"\n").unwrap();
        assert!(kb.is_empty());
    }

    #[test]
    fn test_from_toml_str_missing_help_is_parse_error() {
        let result = KnowledgeBase::from_toml_str("topics = []\n");
        assert!(matches!(result, Err(KnowledgeError::Parse(_))));
    }

    #[test]
    fn test_from_toml_str_malformed() {
        let result = KnowledgeBase::from_toml_str("[[topics]\nid = ");
        assert!(matches!(result, Err(KnowledgeError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_CATALOG.as_bytes()).unwrap();
        let kb = KnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = KnowledgeBase::load(Path::new("/nonexistent/topics.toml"));
        assert!(matches!(result, Err(KnowledgeError::Io(_))));
    }
}
