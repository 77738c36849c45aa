//! remedix-extract — Keyword extraction from free-text symptom descriptions.
//!
//! No parsing and no model inference: a dictionary pass over the lexicon
//! (Aho-Corasick), a synonym table, and an ordered regex fallback chain that
//! only runs when the primary passes find nothing.

pub mod extractor;
pub mod modifiers;
pub mod patterns;
pub mod synonyms;

pub use extractor::SymptomExtractor;
pub use modifiers::{duration_of, intensity_of, DurationHint, Intensity};
