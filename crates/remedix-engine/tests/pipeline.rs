//! End-to-end pipeline tests against the shipped data files.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use remedix_diagnosis::{Confidence, EmergencyLevel, Urgency};
use remedix_engine::{Analysis, DiagnosisOutcome, Engine, EngineSettings};

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn engine() -> Engine {
    init_tracing();
    let settings = EngineSettings {
        data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data")),
        top_n: 3,
    };
    Engine::with_settings(settings).expect("engine should assemble from shipped data")
}

#[test]
fn fever_and_body_pain_reports_viral_infection() {
    match engine().analyze("I have fever and body pain") {
        Analysis::Report(report) => {
            assert_eq!(report.diagnosis.primary.condition, "viral infection");
            assert_eq!(report.diagnosis.primary.score, 1.0);
            assert_eq!(report.diagnosis.primary.confidence, Confidence::High);
            assert_eq!(report.treatment.remedies[0].name, "Ginger Tea");
            assert!(!report.treatment.precautions.is_empty());
            assert!(!report.disclaimer.is_empty());
        }
        other => panic!("expected a full report, got {other:?}"),
    }
}

#[test]
fn lone_headache_is_a_medium_confidence_stress_diagnosis() {
    match engine().analyze("headache") {
        Analysis::Report(report) => {
            assert_eq!(report.diagnosis.primary.condition, "stress or dehydration");
            assert_eq!(report.diagnosis.primary.confidence, Confidence::Medium);
            assert_eq!(report.urgency, Urgency::Low);
        }
        other => panic!("expected a full report, got {other:?}"),
    }
}

#[test]
fn sore_throat_leads_to_salt_water_gargle() {
    match engine().analyze("my throat is sore") {
        Analysis::Report(report) => {
            assert_eq!(report.diagnosis.primary.condition, "throat infection");
            assert_eq!(report.treatment.remedies[0].name, "Salt Water Gargle");
        }
        other => panic!("expected a full report, got {other:?}"),
    }
}

#[test]
fn chest_pain_is_an_emergency_regardless_of_other_symptoms() {
    match engine().analyze("mild cough but also chest pain since an hour") {
        Analysis::Emergency(report) => {
            assert_eq!(report.check.level, EmergencyLevel::Critical);
            assert_eq!(report.check.matched_keyword.as_deref(), Some("chest pain"));
            assert!(!report.actions.actions.is_empty());
            assert!(!report.actions.warning.is_empty());
        }
        other => panic!("expected an emergency, got {other:?}"),
    }
}

#[test]
fn negated_danger_phrase_still_triggers_the_gate() {
    assert!(engine().check_emergency("no chest pain, just tired").triggered);
}

#[test]
fn empty_input_is_unknown_with_suggestions() {
    match engine().analyze("") {
        Analysis::Unknown { suggestions, .. } => {
            assert!(!suggestions.is_empty());
            assert!(suggestions.len() <= 8);
        }
        other => panic!("expected unknown outcome, got {other:?}"),
    }
}

#[test]
fn unrelated_text_is_unknown() {
    match engine().advanced_diagnose("the weather is lovely today") {
        DiagnosisOutcome::Unknown {
            extracted_symptoms, ..
        } => assert!(extracted_symptoms.is_empty()),
        DiagnosisOutcome::Ranked(d) => {
            panic!("expected unknown, diagnosed {}", d.primary.condition)
        }
    }
}

#[test]
fn synonyms_feed_the_same_pipeline_as_canonical_terms() {
    match engine().advanced_diagnose("I keep throwing up and have loose motion") {
        DiagnosisOutcome::Ranked(d) => {
            assert_eq!(d.primary.condition, "digestive upset");
            assert!(d.extracted_symptoms.contains(&"vomiting".to_string()));
        }
        DiagnosisOutcome::Unknown { .. } => panic!("expected a ranked diagnosis"),
    }
}

#[test]
fn differential_list_respects_top_n() {
    match engine().advanced_diagnose("fever, cough and headache") {
        DiagnosisOutcome::Ranked(d) => {
            // primary plus differential never exceeds the configured top_n
            assert!(d.differential.len() < 3);
            for (i, candidate) in d.differential.iter().enumerate() {
                assert_eq!(candidate.rank, i + 2);
                assert!(candidate.score <= d.primary.score);
            }
        }
        DiagnosisOutcome::Unknown { .. } => panic!("expected a ranked diagnosis"),
    }
}

#[test]
fn follow_up_questions_come_from_missing_profile_symptoms() {
    match engine().advanced_diagnose("I have a fever") {
        DiagnosisOutcome::Ranked(d) => {
            assert!(d.follow_up_questions.len() <= 5);
            for q in &d.follow_up_questions {
                assert!(q.ends_with('?'));
            }
        }
        DiagnosisOutcome::Unknown { .. } => panic!("expected a ranked diagnosis"),
    }
}

#[test]
fn simple_diagnose_matches_on_shipped_data() {
    let engine = engine();
    let d = engine.diagnose("fever and body pain all over");
    assert_eq!(d.condition, "viral infection");
    assert_eq!(d.confidence, Confidence::High);

    let d = engine.diagnose("nothing medical here");
    assert_eq!(d.condition, "unknown");
    assert_eq!(d.confidence, Confidence::Low);
}
