//! On-disk schema for `symptoms.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File layout: a flat symptom → primary-condition map plus a
/// condition → symptom-list table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub symptom_map: BTreeMap<String, String>,

    #[serde(default)]
    pub disease_symptoms: BTreeMap<String, Vec<String>>,
}
