//! remedix-lexicon — Static symptom/condition tables and derived weights.
//!
//! Loaded once at process start and immutable afterwards; shared into the
//! extractor and scorer by `Arc`.

pub mod builtin;
pub mod lexicon;
pub mod schema;
pub mod weights;

pub use lexicon::SymptomLexicon;
pub use schema::LexiconFile;
pub use weights::SymptomWeights;
