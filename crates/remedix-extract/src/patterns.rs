//! Ordered regex fallback rules.
//!
//! Evaluated only when the dictionary and synonym passes found nothing.
//! Each rule captures a candidate phrase; the phrase is stripped of filler
//! words and mapped through the partial-keyword table below. The first rule
//! that yields a symptom wins.

use regex::Regex;
use std::sync::OnceLock;

const FALLBACK_PATTERNS: &[&str] = &[
    r"i have (?:a |an |some )?(?:really |very |quite |pretty )?(?:bad |severe |terrible |awful |mild |slight |minor )?([a-z][a-z ]*?)(?: and | that | which |,|\.|$)",
    r"i'?m feeling ([a-z][a-z ]*?)(?: and |,|\.|$)",
    r"experiencing ([a-z][a-z ]*?)(?: and |,|\.|$)",
    r"my ([a-z][a-z ]*?) (?:really |very )?(?:hurts?|aches?|is sore|feels? bad|feels? terrible)",
    r"feel(?:ing)? (?:really |very )?(nauseous|sick|dizzy|tired|weak|feverish)",
];

const FILLER_WORDS: &[&str] = &[
    "a", "an", "the", "some", "really", "very", "quite", "pretty", "kind", "of",
];

/// Fragment-substring → canonical symptom. Applied after cleanup; the
/// canonical symptom is only kept if the lexicon knows it.
const PARTIAL_KEYWORDS: &[(&str, &str)] = &[
    ("headache", "headache"),
    ("stomach", "stomach pain"),
    ("belly", "stomach pain"),
    ("tummy", "stomach pain"),
    ("throat", "sore throat"),
    ("nose", "runny nose"),
    ("stuffy", "runny nose"),
    ("congested", "runny nose"),
    ("temperature", "fever"),
    ("hot", "fever"),
    ("chills", "fever"),
    ("shivering", "fever"),
    ("fever", "fever"),
    ("nauseous", "vomiting"),
    ("queasy", "vomiting"),
    ("sick", "vomiting"),
    ("ache", "body pain"),
    ("tired", "fatigue"),
    ("exhausted", "fatigue"),
    ("weak", "fatigue"),
    ("rash", "skin rash"),
    ("itch", "itching"),
    ("burning", "burning sensation"),
    ("acid", "acidity"),
    ("dizzy", "dizziness"),
    ("cough", "cough"),
];

/// Compiled rule chain, in priority order.
pub fn compiled() -> &'static [Regex] {
    static RULES: OnceLock<Vec<Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        FALLBACK_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("static fallback pattern"))
            .collect()
    })
}

/// Strip filler words from a captured fragment.
pub fn clean_fragment(fragment: &str) -> String {
    fragment
        .split_whitespace()
        .filter(|w| !FILLER_WORDS.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a cleaned fragment to canonical symptoms via the partial-keyword
/// table plus the compound checks (body part + pain word).
pub fn map_partial(fragment: &str) -> Vec<&'static str> {
    let mut mapped = Vec::new();
    for (key, canonical) in PARTIAL_KEYWORDS {
        if fragment.contains(key) {
            mapped.push(*canonical);
        }
    }

    let has = |w: &str| fragment.contains(w);
    let painful = has("pain") || has("hurt") || has("ache");
    if has("head") && painful {
        mapped.push("headache");
    }
    if has("stomach") && painful {
        mapped.push("stomach pain");
    }
    if has("throat") && (painful || has("sore")) {
        mapped.push("sore throat");
    }
    if has("sick") && (has("stomach") || has("nausea")) {
        mapped.push("vomiting");
    }
    mapped
}
