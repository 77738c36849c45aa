//! The loaded symptom lexicon: primary map, condition profiles, and the
//! derived weight table.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use remedix_common::{canonicalize, Result};
use tracing::{info, warn};

use crate::builtin;
use crate::schema::LexiconFile;
use crate::weights::SymptomWeights;

/// Immutable lexical tables. Constructed once; every key is canonical
/// (lower-case, whitespace-normalized).
#[derive(Debug, Clone)]
pub struct SymptomLexicon {
    symptom_map: BTreeMap<String, String>,
    profiles: BTreeMap<String, BTreeSet<String>>,
    weights: SymptomWeights,
}

impl SymptomLexicon {
    /// Build from raw tables, canonicalizing keys and computing weights.
    pub fn from_tables(
        symptom_map: BTreeMap<String, String>,
        disease_symptoms: BTreeMap<String, Vec<String>>,
    ) -> Self {
        let symptom_map: BTreeMap<String, String> = symptom_map
            .into_iter()
            .filter(|(s, _)| !s.trim().is_empty())
            .map(|(s, c)| (canonicalize(&s), canonicalize(&c)))
            .collect();

        let profiles: BTreeMap<String, BTreeSet<String>> = disease_symptoms
            .into_iter()
            .map(|(c, syms)| {
                (
                    canonicalize(&c),
                    syms.iter()
                        .map(|s| canonicalize(s))
                        .filter(|s| !s.is_empty())
                        .collect(),
                )
            })
            .collect();

        let weights = SymptomWeights::compute(&profiles);

        Self {
            symptom_map,
            profiles,
            weights,
        }
    }

    /// Parse `symptoms.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: LexiconFile = serde_json::from_str(&raw)?;
        let lexicon = Self::from_tables(file.symptom_map, file.disease_symptoms);
        info!(
            symptoms = lexicon.symptom_map.len(),
            conditions = lexicon.profiles.len(),
            weighted = lexicon.weights.len(),
            "symptom lexicon loaded from {}",
            path.display()
        );
        Ok(lexicon)
    }

    /// Load from file; a missing or malformed file falls back to the
    /// built-in tables rather than failing.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!("failed to load {}: {e}; using built-in lexicon", path.display());
                Self::builtin()
            }
        }
    }

    /// The hardcoded fallback tables.
    pub fn builtin() -> Self {
        Self::from_tables(builtin::symptom_map(), builtin::disease_symptoms())
    }

    /// Primary condition for a canonical symptom, if mapped.
    pub fn primary_condition(&self, symptom: &str) -> Option<&str> {
        self.symptom_map.get(symptom).map(String::as_str)
    }

    /// All canonical symptoms of the primary map, in ascending order.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.symptom_map.keys().map(String::as_str)
    }

    /// Condition profiles, in ascending condition-name order.
    pub fn profiles(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.profiles.iter().map(|(c, s)| (c.as_str(), s))
    }

    /// Symptom set associated with a condition.
    pub fn profile(&self, condition: &str) -> Option<&BTreeSet<String>> {
        self.profiles.get(condition)
    }

    /// Union of primary-map keys and every profile member: the full set of
    /// canonical symptoms the system can match.
    pub fn all_symptoms(&self) -> BTreeSet<String> {
        let mut all: BTreeSet<String> = self.symptom_map.keys().cloned().collect();
        for profile in self.profiles.values() {
            all.extend(profile.iter().cloned());
        }
        all
    }

    /// Whether a canonical symptom is known, either as a primary-map key or
    /// as a member of any condition profile.
    pub fn contains_symptom(&self, symptom: &str) -> bool {
        self.symptom_map.contains_key(symptom)
            || self.profiles.values().any(|s| s.contains(symptom))
    }

    pub fn weight(&self, symptom: &str) -> f64 {
        self.weights.get(symptom)
    }

    pub fn symptom_count(&self) -> usize {
        self.symptom_map.len()
    }

    pub fn condition_count(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_is_canonical_and_weighted() {
        let lex = SymptomLexicon::builtin();
        assert_eq!(lex.primary_condition("fever"), Some("viral infection"));
        assert!(lex.contains_symptom("sore throat"));
        // "body pain" appears in a single profile; with 8 non-empty
        // profiles its weight is 8.0.
        assert_eq!(lex.weight("body pain"), 8.0);
        assert!(lex.weight("headache") > 1.0);
    }

    #[test]
    fn test_from_tables_canonicalizes_keys() {
        let mut map = BTreeMap::new();
        map.insert("  Sore   Throat ".to_string(), "Throat  Infection".to_string());
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "Throat Infection".to_string(),
            vec!["Sore Throat".to_string(), "  ".to_string()],
        );
        let lex = SymptomLexicon::from_tables(map, profiles);
        assert_eq!(lex.primary_condition("sore throat"), Some("throat infection"));
        let profile = lex.profile("throat infection").unwrap();
        assert_eq!(profile.len(), 1);
        assert!(profile.contains("sore throat"));
    }

    #[test]
    fn test_profile_members_count_as_known_symptoms() {
        let lex = SymptomLexicon::builtin();
        // "dizziness" is only in a profile, never a primary-map key.
        assert!(lex.primary_condition("dizziness").is_none());
        assert!(lex.contains_symptom("dizziness"));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let lex = SymptomLexicon::load_or_builtin(Path::new("/no/such/file.json"));
        assert!(lex.symptom_count() > 0);
    }
}
