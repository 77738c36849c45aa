//! Result types returned by the engine entry points.
//!
//! Every variant is explicit about what happened; callers match instead of
//! probing string-keyed maps.

use remedix_diagnosis::{Candidate, Confidence, EmergencyCheck, Urgency};
use remedix_extract::{DurationHint, Intensity};
use remedix_remedies::{DietPlan, EmergencyActions, RemedyRecord};
use serde::Serialize;

/// Attached to every full analysis report.
pub const DISCLAIMER: &str = "This information is for educational purposes only and is not a \
     substitute for professional medical advice. Consult a qualified healthcare provider.";

/// Output of the keyword-count diagnosis.
#[derive(Debug, Clone, Serialize)]
pub struct SimpleDiagnosis {
    pub condition: String,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Output of the weighted diagnosis when at least one condition scored.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDiagnosis {
    pub primary: Candidate,
    pub differential: Vec<Candidate>,
    pub extracted_symptoms: Vec<String>,
    pub intensity: Intensity,
    pub duration: DurationHint,
    pub follow_up_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DiagnosisOutcome {
    /// Nothing recognizable, or nothing scored.
    Unknown {
        message: String,
        suggestions: Vec<String>,
        extracted_symptoms: Vec<String>,
    },
    Ranked(RankedDiagnosis),
}

/// Remedies and guidance for the primary condition.
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentPlan {
    pub remedies: Vec<RemedyRecord>,
    pub precautions: Vec<String>,
    pub lifestyle: Vec<String>,
    pub diet: DietPlan,
}

/// Returned when the emergency gate fires; diagnosis is suppressed.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyReport {
    pub check: EmergencyCheck,
    pub actions: EmergencyActions,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub diagnosis: RankedDiagnosis,
    pub treatment: TreatmentPlan,
    pub urgency: Urgency,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

/// End-to-end analysis result. The emergency variant always wins over the
/// other two.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Analysis {
    Emergency(EmergencyReport),
    Unknown {
        message: String,
        suggestions: Vec<String>,
    },
    Report(Box<AnalysisReport>),
}
