//! The engine facade: owns the loaded tables and wires the pipeline stages
//! together.

use std::collections::BTreeMap;
use std::sync::Arc;

use remedix_common::Result;
use remedix_diagnosis::{
    follow_up_questions, follow_up_recommendations, symptom_suggestions, urgency_for,
    Confidence, EmergencyCheck, EmergencyGate, Scorer,
};
use remedix_extract::{duration_of, intensity_of, SymptomExtractor};
use remedix_lexicon::SymptomLexicon;
use remedix_remedies::{ContentLibrary, DietPlan, EmergencyActions, RemedyRecord};
use tracing::info;

use crate::report::{
    Analysis, AnalysisReport, DiagnosisOutcome, EmergencyReport, RankedDiagnosis,
    SimpleDiagnosis, TreatmentPlan, DISCLAIMER,
};
use crate::settings::EngineSettings;

pub struct Engine {
    settings: EngineSettings,
    lexicon: Arc<SymptomLexicon>,
    content: Arc<ContentLibrary>,
    extractor: SymptomExtractor,
    scorer: Scorer,
    gate: EmergencyGate,
}

impl Engine {
    /// Build from environment-resolved settings.
    pub fn new() -> Result<Self> {
        Self::with_settings(EngineSettings::load())
    }

    /// Build from explicit settings, loading `symptoms.json` and
    /// `remedies.json` from the configured data directory. Missing files
    /// fall back to the built-in tables.
    pub fn with_settings(settings: EngineSettings) -> Result<Self> {
        let lexicon = Arc::new(SymptomLexicon::load_or_builtin(
            &settings.data_dir.join("symptoms.json"),
        ));
        let content = Arc::new(ContentLibrary::load_or_builtin(
            &settings.data_dir.join("remedies.json"),
        ));
        Self::assemble(settings, lexicon, content)
    }

    /// Build purely from the built-in tables, never touching the filesystem.
    pub fn builtin() -> Result<Self> {
        Self::assemble(
            EngineSettings::default(),
            Arc::new(SymptomLexicon::builtin()),
            Arc::new(ContentLibrary::builtin()),
        )
    }

    fn assemble(
        settings: EngineSettings,
        lexicon: Arc<SymptomLexicon>,
        content: Arc<ContentLibrary>,
    ) -> Result<Self> {
        let extractor = SymptomExtractor::new(Arc::clone(&lexicon))?;
        let scorer = Scorer::new(Arc::clone(&lexicon));
        let gate = EmergencyGate::new(content.emergency_symptoms().to_vec());
        info!(
            symptoms = lexicon.symptom_count(),
            conditions = lexicon.condition_count(),
            "engine assembled"
        );
        Ok(Self {
            settings,
            lexicon,
            content,
            extractor,
            scorer,
            gate,
        })
    }

    pub fn lexicon(&self) -> &SymptomLexicon {
        &self.lexicon
    }

    /// Danger-phrase scan only; no extraction, no scoring.
    pub fn check_emergency(&self, text: &str) -> EmergencyCheck {
        self.gate.check(text)
    }

    /// Keyword-count diagnosis: every primary-map symptom contained in the
    /// text votes for its condition; the condition with the most votes wins,
    /// ties going to the alphabetically first name. Two or more votes in
    /// total mean high confidence, one means medium.
    pub fn diagnose(&self, text: &str) -> SimpleDiagnosis {
        let text = text.to_lowercase();
        let mut votes: BTreeMap<&str, usize> = BTreeMap::new();
        for symptom in self.lexicon.symptoms() {
            if text.contains(symptom) {
                if let Some(condition) = self.lexicon.primary_condition(symptom) {
                    *votes.entry(condition).or_insert(0) += 1;
                }
            }
        }

        if votes.is_empty() {
            return SimpleDiagnosis {
                condition: "unknown".to_string(),
                confidence: Confidence::Low,
                message: Some(
                    "Symptoms are unclear. Please consult a doctor if they persist."
                        .to_string(),
                ),
            };
        }

        let total: usize = votes.values().sum();
        let mut best: (&str, usize) = ("", 0);
        for (condition, count) in &votes {
            if *count > best.1 {
                best = (condition, *count);
            }
        }

        SimpleDiagnosis {
            condition: best.0.to_string(),
            confidence: if total >= 2 {
                Confidence::High
            } else {
                Confidence::Medium
            },
            message: None,
        }
    }

    /// Weighted diagnosis: extract, score, rank, and describe the top
    /// candidates with intensity, duration, and follow-up questions.
    pub fn advanced_diagnose(&self, text: &str) -> DiagnosisOutcome {
        let symptoms = self.extractor.extract(text);
        if symptoms.is_empty() {
            return DiagnosisOutcome::Unknown {
                message: "No recognizable symptoms found. Please describe what you are \
                          feeling more specifically."
                    .to_string(),
                suggestions: symptom_suggestions(&self.lexicon),
                extracted_symptoms: Vec::new(),
            };
        }

        let mut ranked = self.scorer.rank(&symptoms, self.settings.top_n);
        if ranked.is_empty() {
            // Symptoms were recognized but scored nothing; suggestions are
            // only offered for unrecognized input.
            return DiagnosisOutcome::Unknown {
                message: "The described symptoms did not match any known condition."
                    .to_string(),
                suggestions: Vec::new(),
                extracted_symptoms: symptoms.into_iter().collect(),
            };
        }

        let primary = ranked.remove(0);
        let follow_up = follow_up_questions(&primary.missing_symptoms);
        DiagnosisOutcome::Ranked(RankedDiagnosis {
            primary,
            differential: ranked,
            extracted_symptoms: symptoms.into_iter().collect(),
            intensity: intensity_of(text),
            duration: duration_of(text),
            follow_up_questions: follow_up,
        })
    }

    /// Full pipeline: emergency gate first, then diagnosis, then content
    /// lookup for the primary condition.
    pub fn analyze(&self, text: &str) -> Analysis {
        let check = self.check_emergency(text);
        if check.triggered {
            return Analysis::Emergency(EmergencyReport {
                actions: self.content.emergency_actions("general"),
                check,
                message: "Medical emergency detected. Seek immediate professional help."
                    .to_string(),
            });
        }

        match self.advanced_diagnose(text) {
            DiagnosisOutcome::Unknown {
                message,
                suggestions,
                ..
            } => Analysis::Unknown {
                message,
                suggestions,
            },
            DiagnosisOutcome::Ranked(diagnosis) => {
                let condition = diagnosis.primary.condition.clone();
                let treatment = TreatmentPlan {
                    remedies: self.content.remedies(&condition).to_vec(),
                    precautions: self.content.precautions(&condition).to_vec(),
                    lifestyle: self.content.lifestyle(&condition).to_vec(),
                    diet: self.content.diet(&condition),
                };
                let urgency = urgency_for(&condition, diagnosis.primary.confidence);
                Analysis::Report(Box::new(AnalysisReport {
                    diagnosis,
                    treatment,
                    urgency,
                    recommendations: follow_up_recommendations(urgency),
                    disclaimer: DISCLAIMER.to_string(),
                }))
            }
        }
    }

    pub fn remedies(&self, condition: &str) -> &[RemedyRecord] {
        self.content.remedies(condition)
    }

    pub fn precautions(&self, condition: &str) -> &[String] {
        self.content.precautions(condition)
    }

    pub fn lifestyle(&self, condition: &str) -> &[String] {
        self.content.lifestyle(condition)
    }

    pub fn diet(&self, condition: &str) -> DietPlan {
        self.content.diet(condition)
    }

    pub fn emergency_actions(&self, condition: &str) -> EmergencyActions {
        self.content.emergency_actions(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine() -> Engine {
        Engine::builtin().unwrap()
    }

    #[test]
    fn test_simple_diagnose_counts_votes() {
        let d = engine().diagnose("I have fever and body pain");
        assert_eq!(d.condition, "viral infection");
        assert_eq!(d.confidence, Confidence::High);
        assert!(d.message.is_none());
    }

    #[test]
    fn test_simple_diagnose_single_vote_is_medium() {
        let d = engine().diagnose("a bit of headache");
        assert_eq!(d.condition, "stress or dehydration");
        assert_eq!(d.confidence, Confidence::Medium);
    }

    #[test]
    fn test_simple_diagnose_unknown() {
        let d = engine().diagnose("my bicycle is broken");
        assert_eq!(d.condition, "unknown");
        assert_eq!(d.confidence, Confidence::Low);
        assert!(d.message.is_some());
    }

    #[test]
    fn test_advanced_diagnose_ranks_viral_infection() {
        match engine().advanced_diagnose("I have fever and body pain since yesterday") {
            DiagnosisOutcome::Ranked(d) => {
                assert_eq!(d.primary.condition, "viral infection");
                assert_eq!(d.primary.score, 1.0);
                assert!(d.extracted_symptoms.contains(&"fever".to_string()));
            }
            DiagnosisOutcome::Unknown { .. } => panic!("expected a ranked diagnosis"),
        }
    }

    #[test]
    fn test_advanced_diagnose_unknown_offers_suggestions() {
        match engine().advanced_diagnose("xyzzy unrelated text") {
            DiagnosisOutcome::Unknown {
                suggestions,
                extracted_symptoms,
                ..
            } => {
                assert!(!suggestions.is_empty());
                assert!(extracted_symptoms.is_empty());
            }
            DiagnosisOutcome::Ranked(_) => panic!("expected unknown outcome"),
        }
    }

    #[test]
    fn test_analyze_emergency_wins_over_diagnosis() {
        match engine().analyze("fever, body pain and chest pain") {
            Analysis::Emergency(report) => {
                assert_eq!(report.check.matched_keyword.as_deref(), Some("chest pain"));
                assert!(!report.actions.actions.is_empty());
            }
            _ => panic!("expected emergency outcome"),
        }
    }
}
