//! Condition scoring and ranking.
//!
//! Two accumulation passes feed the same per-condition total:
//! 1. primary-map pass — each input symptom adds its weight to its primary
//!    condition;
//! 2. profile pass — each condition with a non-empty profile intersection I
//!    adds `(|I| / |profile|) * Σ weight(s ∈ I)`.
//! Totals are then normalized by the maximum, so the top condition scores
//! exactly 1.0 whenever anything scored at all.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use remedix_lexicon::SymptomLexicon;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::confidence::Confidence;

/// Missing symptoms reported per candidate are capped here.
const MAX_MISSING: usize = 5;

/// Suggestions offered on an empty symptom set are capped here.
pub const MAX_SUGGESTIONS: usize = 8;

/// Common symptoms offered when the input yields nothing; filtered to
/// entries the loaded lexicon actually knows.
const COMMON_SYMPTOMS: &[&str] = &[
    "fever",
    "headache",
    "cough",
    "stomach pain",
    "fatigue",
    "nausea",
    "vomiting",
    "diarrhea",
    "joint pain",
    "muscle pain",
    "skin rash",
    "breathlessness",
    "dizziness",
    "sore throat",
];

/// One ranked diagnosis candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub condition: String,
    /// Normalized score in [0, 1], rounded to three decimals.
    pub score: f64,
    pub confidence: Confidence,
    /// 1-based position in the ranking.
    pub rank: usize,
    pub matching_symptoms: Vec<String>,
    /// Profile symptoms absent from the input, at most five.
    pub missing_symptoms: Vec<String>,
    pub profile_size: usize,
}

pub struct Scorer {
    lexicon: Arc<SymptomLexicon>,
}

impl Scorer {
    pub fn new(lexicon: Arc<SymptomLexicon>) -> Self {
        Self { lexicon }
    }

    /// Normalized per-condition scores. Empty map when no condition scored.
    pub fn score(&self, symptoms: &BTreeSet<String>) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        if symptoms.is_empty() {
            return totals;
        }

        for symptom in symptoms {
            if let Some(condition) = self.lexicon.primary_condition(symptom) {
                *totals.entry(condition.to_string()).or_insert(0.0) +=
                    self.lexicon.weight(symptom);
            }
        }

        for (condition, profile) in self.lexicon.profiles() {
            if profile.is_empty() {
                continue;
            }
            let intersection: Vec<&String> = profile.intersection(symptoms).collect();
            if intersection.is_empty() {
                continue;
            }
            let match_fraction = intersection.len() as f64 / profile.len() as f64;
            let weighted_sum: f64 = intersection
                .iter()
                .map(|s| self.lexicon.weight(s.as_str()))
                .sum();
            *totals.entry(condition.to_string()).or_insert(0.0) +=
                match_fraction * weighted_sum;
        }

        let max = totals.values().cloned().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return BTreeMap::new();
        }
        for value in totals.values_mut() {
            *value /= max;
        }
        debug!(conditions = totals.len(), "scored symptom set");
        totals
    }

    /// Ranked candidates, best first. Ties break by ascending condition
    /// name so ranking is deterministic.
    pub fn rank(&self, symptoms: &BTreeSet<String>, top_n: usize) -> Vec<Candidate> {
        let scores = self.score(symptoms);

        // BTreeMap iterates in ascending name order; the stable sort on the
        // descending score preserves that order inside each tie group.
        let mut ordered: Vec<(String, f64)> = scores.into_iter().collect();
        ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        ordered
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(i, (condition, score))| {
                let profile = self.lexicon.profile(&condition);
                let (matching, missing, profile_size) = match profile {
                    Some(profile) => {
                        let matching: Vec<String> =
                            profile.intersection(symptoms).cloned().collect();
                        let missing: Vec<String> = profile
                            .difference(symptoms)
                            .take(MAX_MISSING)
                            .cloned()
                            .collect();
                        (matching, missing, profile.len())
                    }
                    None => (Vec::new(), Vec::new(), 0),
                };
                Candidate {
                    condition,
                    score: (score * 1000.0).round() / 1000.0,
                    confidence: Confidence::from_score(score, symptoms.len()),
                    rank: i + 1,
                    matching_symptoms: matching,
                    missing_symptoms: missing,
                    profile_size,
                }
            })
            .collect()
    }
}

/// Fixed suggestion list for unrecognized input, restricted to symptoms the
/// lexicon can match.
pub fn symptom_suggestions(lexicon: &SymptomLexicon) -> Vec<String> {
    COMMON_SYMPTOMS
        .iter()
        .copied()
        .filter(|&s| lexicon.contains_symptom(s))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}
