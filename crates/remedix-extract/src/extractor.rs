//! Keyword extraction: raw text → set of canonical symptoms.
//!
//! Pass order:
//! 1. dictionary pass — every canonical lexicon symptom contained in the
//!    text, matched with one Aho-Corasick automaton (overlapping matches,
//!    so "cough" still fires inside "dry cough");
//! 2. synonym pass — colloquial phrases on word boundaries;
//! 3. fallback chain — only when nothing was found: exact whole-input
//!    lookup, single-token partial match, then the regex rule chain;
//! 4. conjunction rules — always applied, force-adding fixed symptoms for
//!    co-occurring raw tokens ("stomach" + "hurt").

use std::collections::BTreeSet;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use remedix_common::{canonicalize, contains_phrase, tokens, RemedixError, Result};
use remedix_lexicon::SymptomLexicon;
use tracing::debug;

use crate::patterns;
use crate::synonyms::SYNONYMS;

pub struct SymptomExtractor {
    lexicon: Arc<SymptomLexicon>,
    automaton: AhoCorasick,
    pattern_symptoms: Vec<String>,
}

impl SymptomExtractor {
    pub fn new(lexicon: Arc<SymptomLexicon>) -> Result<Self> {
        let pattern_symptoms: Vec<String> = lexicon.all_symptoms().into_iter().collect();
        let automaton = AhoCorasick::new(&pattern_symptoms)
            .map_err(|e| RemedixError::DataLoad(format!("symptom automaton: {e}")))?;
        debug!(patterns = pattern_symptoms.len(), "symptom automaton built");
        Ok(Self {
            lexicon,
            automaton,
            pattern_symptoms,
        })
    }

    /// Extract canonical symptoms from free text. No match is an empty set,
    /// never an error.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let text = text.trim().to_lowercase();
        let mut found = BTreeSet::new();
        if text.is_empty() {
            return found;
        }

        for m in self.automaton.find_overlapping_iter(&text) {
            found.insert(self.pattern_symptoms[m.pattern().as_usize()].clone());
        }

        for (phrase, canonical) in SYNONYMS {
            if self.lexicon.contains_symptom(canonical) && contains_phrase(&text, phrase) {
                found.insert((*canonical).to_string());
            }
        }

        if found.is_empty() {
            self.fallback_passes(&text, &mut found);
        }

        self.apply_conjunctions(&text, &mut found);
        found
    }

    fn fallback_passes(&self, text: &str, found: &mut BTreeSet<String>) {
        // Exact whole-input lookup.
        let whole = canonicalize(text);
        if self.lexicon.contains_symptom(&whole) {
            found.insert(whole);
            return;
        }

        // A single word that occurs as a word of some canonical symptom
        // adopts the first such symptom.
        let words = tokens(text);
        if words.len() == 1 {
            let word = words[0].as_str();
            if let Some(symptom) = self
                .pattern_symptoms
                .iter()
                .find(|s| s.split_whitespace().any(|w| w == word))
            {
                found.insert(symptom.clone());
                return;
            }
        }

        // Regex rule chain; the first rule that yields a symptom wins.
        for rule in patterns::compiled() {
            for caps in rule.captures_iter(text) {
                let Some(fragment) = caps.get(1) else { continue };
                let cleaned = patterns::clean_fragment(fragment.as_str());
                if cleaned.is_empty() || cleaned.split_whitespace().count() > 4 {
                    continue;
                }
                for canonical in patterns::map_partial(&cleaned) {
                    if self.lexicon.contains_symptom(canonical) {
                        found.insert(canonical.to_string());
                    }
                }
                if self.lexicon.contains_symptom(&cleaned) {
                    found.insert(cleaned);
                }
            }
            if !found.is_empty() {
                return;
            }
        }
    }

    fn apply_conjunctions(&self, text: &str, found: &mut BTreeSet<String>) {
        let toks: BTreeSet<String> = tokens(text).into_iter().collect();
        let has = |w: &str| toks.contains(w);
        let pain_word = ["hurt", "hurts", "hurting", "pain", "ache", "aches", "aching"]
            .iter()
            .any(|w| has(w));

        let mut force = |symptom: &str| {
            if self.lexicon.contains_symptom(symptom) {
                found.insert(symptom.to_string());
            }
        };

        if has("stomach") && pain_word {
            force("stomach pain");
        }
        if has("head") && pain_word {
            force("headache");
        }
        if has("sick") && has("stomach") {
            force("vomiting");
        }
        if has("throat") && (pain_word || has("sore")) {
            force("sore throat");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> SymptomExtractor {
        SymptomExtractor::new(Arc::new(SymptomLexicon::builtin())).unwrap()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_and_unrelated_input() {
        let ex = extractor();
        assert!(ex.extract("").is_empty());
        assert!(ex.extract("   ").is_empty());
        assert!(ex.extract("xyzzy unrelated text").is_empty());
    }

    #[test]
    fn test_dictionary_pass_finds_contained_symptoms() {
        let ex = extractor();
        let found = ex.extract("I have fever and body pain");
        assert_eq!(found, set(&["body pain", "fever"]));
    }

    #[test]
    fn test_overlapping_symptoms_both_reported() {
        let ex = extractor();
        let found = ex.extract("a dry cough since monday");
        assert!(found.contains("dry cough"));
        assert!(found.contains("cough"));
    }

    #[test]
    fn test_synonym_pass_maps_colloquial_phrases() {
        let ex = extractor();
        let found = ex.extract("I keep throwing up and feel exhausted");
        assert!(found.contains("vomiting"));
        assert!(found.contains("fatigue"));
    }

    #[test]
    fn test_synonym_respects_word_boundaries() {
        // "ache" inside "headache" must not fire any body-pain synonym.
        let ex = extractor();
        let found = ex.extract("headache");
        assert_eq!(found, set(&["headache"]));
    }

    #[test]
    fn test_fallback_exact_lookup() {
        let ex = extractor();
        assert_eq!(ex.extract("  Sore   Throat "), set(&["sore throat"]));
    }

    #[test]
    fn test_fallback_single_token_partial() {
        let ex = extractor();
        // "runny" is a word of "runny nose" only.
        assert_eq!(ex.extract("runny"), set(&["runny nose"]));
    }

    #[test]
    fn test_fallback_regex_chain() {
        let ex = extractor();
        let found = ex.extract("my tummy really hurts");
        assert!(found.contains("stomach pain"));
    }

    #[test]
    fn test_conjunction_forces_symptom() {
        let ex = extractor();
        let found = ex.extract("my stomach hurt after dinner");
        assert!(found.contains("stomach pain"));
        let found = ex.extract("feeling sick and my stomach is off");
        assert!(found.contains("vomiting"));
    }

    #[test]
    fn test_extraction_is_a_fixed_point() {
        let ex = extractor();
        for input in ["fever and body pain", "sore throat", "runny nose and cough"] {
            let first = ex.extract(input);
            let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
            let second = ex.extract(&joined);
            assert_eq!(first, second, "re-extracting {joined:?}");
        }
    }
}
