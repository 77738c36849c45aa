//! remedix-remedies — Static remedy/precaution/lifestyle/diet content and
//! emergency action payloads, keyed by condition name.
//!
//! Pure table lookups: unknown condition names yield empty collections,
//! never errors.

pub mod builtin;
pub mod content;
pub mod records;

pub use content::ContentLibrary;
pub use records::{DietPlan, EmergencyActions, RemedyRecord};
