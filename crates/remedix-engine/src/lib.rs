//! remedix-engine — The assembled triage pipeline.
//!
//! Raw text → emergency gate → keyword extraction → scoring → content
//! lookup. Conversation, CLI, and HTTP shells sit on top of the entry
//! points exposed here; nothing in this crate performs I/O after
//! construction.

pub mod engine;
pub mod report;
pub mod settings;

pub use engine::Engine;
pub use report::{
    Analysis, AnalysisReport, DiagnosisOutcome, EmergencyReport, RankedDiagnosis,
    SimpleDiagnosis, TreatmentPlan, DISCLAIMER,
};
pub use settings::EngineSettings;
