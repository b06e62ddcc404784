//! Detector for "how many hours may I work per week" questions.

/// Substrings that mark a weekly work-hour question.
///
/// Part of the external contract: changing this list changes which
/// messages get the short answer.
pub const HOURS_TRIGGERS: &[&str] = &[
    "how many hours",
    "hours per week",
    "max hours",
    "hour limit",
    "28h",
    "28 hours",
    "28時間",
    // Japanese question forms
    "何時間",
    "週何時間",
    "バイト 何時間",
    "シフト 何時間",
];

/// True if `text` contains any hours trigger, ignoring case.
pub fn is_hours_question(text: &str) -> bool {
    let lower = text.to_lowercase();
    HOURS_TRIGGERS.iter().any(|trigger| lower.contains(trigger))
}
