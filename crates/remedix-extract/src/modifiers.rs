//! Intensity and duration hints pulled from the raw text.
//!
//! These never affect scoring; they ride along on the diagnosis result for
//! the conversation layer to phrase its response.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Mild,
    Moderate,
    Severe,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Mild => "mild",
            Intensity::Moderate => "moderate",
            Intensity::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationHint {
    Acute,
    Recent,
    Chronic,
    Unknown,
}

impl DurationHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationHint::Acute => "acute",
            DurationHint::Recent => "recent",
            DurationHint::Chronic => "chronic",
            DurationHint::Unknown => "unknown",
        }
    }
}

const SEVERE_WORDS: &[&str] = &["severe", "extreme", "terrible", "awful", "unbearable"];
const MILD_WORDS: &[&str] = &["mild", "slight", "little", "minor"];

/// Strongest intensity modifier present in the text; anything without an
/// explicit modifier counts as moderate.
pub fn intensity_of(text: &str) -> Intensity {
    let text = text.to_lowercase();
    let any = |words: &[&str]| words.iter().any(|w| text.contains(w));
    if any(SEVERE_WORDS) {
        Intensity::Severe
    } else if any(MILD_WORDS) {
        Intensity::Mild
    } else {
        Intensity::Moderate
    }
}

fn duration_rules() -> &'static [(Regex, DurationHint)] {
    static RULES: OnceLock<Vec<(Regex, DurationHint)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"for \d+ days?", DurationHint::Chronic),
            (r"all week", DurationHint::Chronic),
            (r"gradually", DurationHint::Chronic),
            (r"\d+ days? ago", DurationHint::Recent),
            (r"since yesterday", DurationHint::Recent),
            (r"just started", DurationHint::Acute),
            (r"suddenly", DurationHint::Acute),
        ]
        .into_iter()
        .map(|(p, d)| (Regex::new(p).expect("static duration pattern"), d))
        .collect()
    })
}

/// First duration pattern that matches; defaults to unknown.
pub fn duration_of(text: &str) -> DurationHint {
    let text = text.to_lowercase();
    for (re, hint) in duration_rules() {
        if re.is_match(&text) {
            return *hint;
        }
    }
    DurationHint::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_tiers() {
        assert_eq!(intensity_of("a severe headache"), Intensity::Severe);
        assert_eq!(intensity_of("a slight cough"), Intensity::Mild);
        assert_eq!(intensity_of("sharp stomach pain"), Intensity::Moderate);
        assert_eq!(intensity_of("headache"), Intensity::Moderate);
    }

    #[test]
    fn test_duration_patterns() {
        assert_eq!(duration_of("fever for 3 days"), DurationHint::Chronic);
        assert_eq!(duration_of("it just started"), DurationHint::Acute);
        assert_eq!(duration_of("started 2 days ago"), DurationHint::Recent);
        assert_eq!(duration_of("headache"), DurationHint::Unknown);
    }
}
