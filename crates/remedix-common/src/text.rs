//! Text normalization helpers.
//!
//! Every table in the system is keyed by the canonical form produced here:
//! lower-case, trimmed, inner whitespace collapsed to single spaces.

/// Canonical key form for symptom and condition names.
pub fn canonicalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word tokens of a text: maximal alphanumeric runs, lower-cased.
pub fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `phrase` occurs in `text` as a whole-word sequence.
///
/// "ache" does not match inside "headache"; "throwing up" matches
/// "was throwing up all night".
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let text_tokens = tokens(text);
    let phrase_tokens = tokens(phrase);
    if phrase_tokens.is_empty() || phrase_tokens.len() > text_tokens.len() {
        return false;
    }
    text_tokens
        .windows(phrase_tokens.len())
        .any(|w| w == phrase_tokens.as_slice())
}
