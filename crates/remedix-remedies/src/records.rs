//! Content record types shared with the `remedies.json` schema.

use serde::{Deserialize, Serialize};

/// One natural remedy: what it is, what it does, why it works, and
/// optionally how to use it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyRecord {
    #[serde(rename = "remedy")]
    pub name: String,
    pub benefit: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// Dietary guidance for a condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    #[serde(default, rename = "foods_to_include")]
    pub include: Vec<String>,
    #[serde(default, rename = "foods_to_avoid")]
    pub avoid: Vec<String>,
}

/// Fixed response payload for an emergency trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyActions {
    #[serde(rename = "immediate_actions")]
    pub actions: Vec<String>,
    pub warning: String,
}
