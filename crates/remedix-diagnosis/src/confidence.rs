//! Confidence labels derived from the normalized top score and the input
//! symptom count. The threshold table is evaluated top to bottom; the first
//! row that matches wins.

use serde::{Deserialize, Serialize};

/// Ordered ascending so monotonicity can be asserted with `<=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "very low")]
    VeryLow,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl Confidence {
    /// | top_score ≥ | symptom_count ≥ | label     |
    /// |-------------|-----------------|-----------|
    /// | 0.8         | 3               | very high |
    /// | 0.6         | 2               | high      |
    /// | 0.4         | —               | medium    |
    /// | 0.2         | —               | low       |
    /// | else        | —               | very low  |
    pub fn from_score(top_score: f64, symptom_count: usize) -> Self {
        if top_score >= 0.8 && symptom_count >= 3 {
            Confidence::VeryHigh
        } else if top_score >= 0.6 && symptom_count >= 2 {
            Confidence::High
        } else if top_score >= 0.4 {
            Confidence::Medium
        } else if top_score >= 0.2 {
            Confidence::Low
        } else {
            Confidence::VeryLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::VeryHigh => "very high",
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::VeryLow => "very low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
