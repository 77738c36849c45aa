//! remedix-common — Shared error type and text helpers used across all remedix crates.

pub mod error;
pub mod text;

pub use error::{RemedixError, Result};
pub use text::{canonicalize, contains_phrase, tokens};
