//! Utterance normalization.

/// Lower-case a raw utterance for substring matching.
///
/// Returns `None` for empty input so callers can short-circuit to the
/// context and default tiers. Non-ASCII text is only case-folded, which
/// leaves Japanese untouched.
pub fn normalize(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.to_lowercase())
}
