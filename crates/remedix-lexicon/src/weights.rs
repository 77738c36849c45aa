//! Inverse-condition-frequency symptom weights.
//!
//! A symptom appearing in few condition profiles is more diagnostic than one
//! appearing in many, so `weight(s) = max(1.0, N / count(s))` where N is the
//! number of conditions with a non-empty profile. Computed once at load time.

use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct SymptomWeights {
    weights: HashMap<String, f64>,
}

impl SymptomWeights {
    pub fn compute(profiles: &BTreeMap<String, BTreeSet<String>>) -> Self {
        let mut occurrence: HashMap<&str, usize> = HashMap::new();
        // Conditions with empty profiles are excluded from the denominator.
        let total = profiles.values().filter(|s| !s.is_empty()).count();

        for symptoms in profiles.values() {
            for symptom in symptoms {
                *occurrence.entry(symptom.as_str()).or_insert(0) += 1;
            }
        }

        let weights = occurrence
            .into_iter()
            .map(|(symptom, count)| {
                let w = (total as f64 / count as f64).max(1.0);
                (symptom.to_string(), w)
            })
            .collect();

        Self { weights }
    }

    /// Weight of a symptom; symptoms absent from every profile get 1.0.
    pub fn get(&self, symptom: &str) -> f64 {
        self.weights.get(symptom).copied().unwrap_or(1.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
