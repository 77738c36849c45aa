//! The content library: remedies, precautions, lifestyle, diet, and
//! emergency payloads, loaded once from `remedies.json`.

use std::collections::BTreeMap;
use std::path::Path;

use remedix_common::{canonicalize, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::builtin;
use crate::records::{DietPlan, EmergencyActions, RemedyRecord};

/// On-disk schema for `remedies.json`. Every section is optional; missing
/// sections become empty tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub remedy_database: BTreeMap<String, Vec<RemedyRecord>>,
    #[serde(default)]
    pub disease_precautions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub lifestyle_recommendations: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub dietary_recommendations: BTreeMap<String, DietPlan>,
    #[serde(default)]
    pub emergency_symptoms: Vec<String>,
    #[serde(default)]
    pub emergency_actions: BTreeMap<String, EmergencyActions>,
}

/// Immutable content tables keyed by canonical condition name.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    remedies: BTreeMap<String, Vec<RemedyRecord>>,
    precautions: BTreeMap<String, Vec<String>>,
    lifestyle: BTreeMap<String, Vec<String>>,
    diet: BTreeMap<String, DietPlan>,
    emergency_symptoms: Vec<String>,
    emergency_actions: BTreeMap<String, EmergencyActions>,
}

fn rekey<V>(table: BTreeMap<String, V>) -> BTreeMap<String, V> {
    table
        .into_iter()
        .map(|(k, v)| (canonicalize(&k), v))
        .collect()
}

impl ContentLibrary {
    pub fn from_parts(file: ContentFile) -> Self {
        Self {
            remedies: rekey(file.remedy_database),
            precautions: rekey(file.disease_precautions),
            lifestyle: rekey(file.lifestyle_recommendations),
            diet: rekey(file.dietary_recommendations),
            emergency_symptoms: file.emergency_symptoms,
            emergency_actions: rekey(file.emergency_actions),
        }
    }

    /// Parse `remedies.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: ContentFile = serde_json::from_str(&raw)?;
        let library = Self::from_parts(file);
        info!(
            conditions = library.remedies.len(),
            emergency_phrases = library.emergency_symptoms.len(),
            "content library loaded from {}",
            path.display()
        );
        Ok(library)
    }

    /// Load from file; a missing or malformed file falls back to the
    /// built-in content rather than failing.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(library) => library,
            Err(e) => {
                warn!("failed to load {}: {e}; using built-in content", path.display());
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        Self::from_parts(ContentFile {
            remedy_database: builtin::remedy_database(),
            disease_precautions: builtin::disease_precautions(),
            emergency_symptoms: builtin::emergency_symptoms(),
            ..Default::default()
        })
    }

    pub fn remedies(&self, condition: &str) -> &[RemedyRecord] {
        self.remedies
            .get(&canonicalize(condition))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn precautions(&self, condition: &str) -> &[String] {
        self.precautions
            .get(&canonicalize(condition))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn lifestyle(&self, condition: &str) -> &[String] {
        self.lifestyle
            .get(&canonicalize(condition))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn diet(&self, condition: &str) -> DietPlan {
        self.diet
            .get(&canonicalize(condition))
            .cloned()
            .unwrap_or_default()
    }

    /// Danger phrases consumed by the emergency gate, in priority order.
    pub fn emergency_symptoms(&self) -> &[String] {
        &self.emergency_symptoms
    }

    /// Emergency payload for a condition; falls back to the "general"
    /// entry, then to the built-in default.
    pub fn emergency_actions(&self, condition: &str) -> EmergencyActions {
        self.emergency_actions
            .get(&canonicalize(condition))
            .or_else(|| self.emergency_actions.get("general"))
            .cloned()
            .unwrap_or_else(builtin::general_emergency_actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_condition_yields_empty_collections() {
        let lib = ContentLibrary::builtin();
        assert!(lib.remedies("martian flu").is_empty());
        assert!(lib.precautions("martian flu").is_empty());
        assert!(lib.lifestyle("martian flu").is_empty());
        assert_eq!(lib.diet("martian flu"), DietPlan::default());
    }

    #[test]
    fn test_lookup_is_case_folded() {
        let lib = ContentLibrary::builtin();
        assert_eq!(lib.remedies("Throat  Infection")[0].name, "Salt Water Gargle");
    }

    #[test]
    fn test_builtin_emergency_list_priority_order() {
        let lib = ContentLibrary::builtin();
        assert_eq!(lib.emergency_symptoms()[0], "chest pain");
        assert!(lib.emergency_symptoms().len() >= 8);
    }

    #[test]
    fn test_emergency_actions_fall_back_to_general_default() {
        let lib = ContentLibrary::builtin();
        let payload = lib.emergency_actions("anything");
        assert!(!payload.actions.is_empty());
        assert!(!payload.warning.is_empty());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let lib = ContentLibrary::load_or_builtin(Path::new("/no/such/remedies.json"));
        assert!(!lib.remedies("viral infection").is_empty());
    }
}
