//! remedix-diagnosis — Condition scoring, ranking, confidence labels, the
//! emergency gate, and follow-up question generation.

pub mod confidence;
pub mod emergency;
pub mod questions;
pub mod scorer;

pub use confidence::Confidence;
pub use emergency::{EmergencyCheck, EmergencyGate, EmergencyLevel};
pub use questions::{follow_up_questions, follow_up_recommendations, urgency_for, Urgency};
pub use scorer::{symptom_suggestions, Candidate, Scorer};
