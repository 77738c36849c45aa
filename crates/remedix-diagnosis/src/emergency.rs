//! The emergency gate: a fixed danger-phrase scan that runs before any
//! extraction or scoring and suppresses normal diagnosis when it fires.
//!
//! Matching is deliberately naive: plain substring containment against the
//! lower-cased raw text, first phrase in list order wins. There is no
//! negation handling — "no chest pain" still triggers. That is a
//! high-sensitivity, low-specificity safety bias and must stay that way.

use remedix_common::canonicalize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyLevel {
    Normal,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyCheck {
    pub triggered: bool,
    pub matched_keyword: Option<String>,
    pub level: EmergencyLevel,
}

pub struct EmergencyGate {
    phrases: Vec<String>,
}

impl EmergencyGate {
    /// Earlier phrases take priority when several match.
    pub fn new(phrases: Vec<String>) -> Self {
        let phrases = phrases
            .iter()
            .map(|p| canonicalize(p))
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    pub fn check(&self, raw_text: &str) -> EmergencyCheck {
        let text = raw_text.to_lowercase();
        for phrase in &self.phrases {
            if text.contains(phrase.as_str()) {
                return EmergencyCheck {
                    triggered: true,
                    matched_keyword: Some(phrase.clone()),
                    level: EmergencyLevel::Critical,
                };
            }
        }
        EmergencyCheck {
            triggered: false,
            matched_keyword: None,
            level: EmergencyLevel::Normal,
        }
    }
}
