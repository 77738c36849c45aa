//! Follow-up questions and urgency tiers for the conversation layer.

use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// Symptom → question phrasing for the follow-up flow.
const SYMPTOM_QUESTIONS: &[(&str, &str)] = &[
    ("high fever", "Do you have a high fever (over 101°F/38.3°C)?"),
    ("fever", "Do you have a fever?"),
    ("fatigue", "Are you feeling unusually tired or fatigued?"),
    ("headache", "Do you have a headache?"),
    ("nausea", "Are you feeling nauseous or sick to your stomach?"),
    ("vomiting", "Have you been vomiting?"),
    ("diarrhea", "Do you have diarrhea or loose stools?"),
    ("joint pain", "Are you experiencing any joint pain?"),
    ("muscle pain", "Do you have muscle aches or pain?"),
    ("body pain", "Do you have body aches or pain?"),
    ("skin rash", "Do you have any skin rash or skin changes?"),
    ("weight loss", "Have you experienced unexplained weight loss?"),
    ("loss of appetite", "Have you lost your appetite?"),
    ("sweating", "Are you experiencing excessive sweating?"),
    ("dizziness", "Do you feel dizzy or lightheaded?"),
    ("chills", "Do you have chills or shivering?"),
    ("sore throat", "Is your throat sore or painful?"),
    ("cough", "Do you have a cough?"),
    ("breathlessness", "Do you have difficulty breathing or shortness of breath?"),
];

const MAX_QUESTIONS: usize = 5;

/// Turn the top candidate's missing symptoms into at most five follow-up
/// questions; symptoms without a phrasing are skipped.
pub fn follow_up_questions(missing_symptoms: &[String]) -> Vec<String> {
    missing_symptoms
        .iter()
        .filter_map(|symptom| {
            SYMPTOM_QUESTIONS
                .iter()
                .find(|(s, _)| *s == symptom.as_str())
                .map(|(_, q)| q.to_string())
        })
        .take(MAX_QUESTIONS)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

const HIGH_URGENCY_CONDITIONS: &[&str] = &[
    "heart attack",
    "paralysis (brain hemorrhage)",
    "hepatitis e",
    "acute liver failure",
    "pneumonia",
];

const MEDIUM_URGENCY_CONDITIONS: &[&str] = &[
    "diabetes",
    "hypertension",
    "bronchial asthma",
    "tuberculosis",
    "hepatitis a",
    "hepatitis b",
    "hepatitis c",
];

/// Urgency of seeking professional care for a diagnosed condition.
pub fn urgency_for(condition: &str, confidence: Confidence) -> Urgency {
    if HIGH_URGENCY_CONDITIONS.contains(&condition) {
        Urgency::High
    } else if MEDIUM_URGENCY_CONDITIONS.contains(&condition)
        || confidence >= Confidence::High
    {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Canned follow-up advice per urgency tier.
pub fn follow_up_recommendations(urgency: Urgency) -> Vec<String> {
    let lines: &[&str] = match urgency {
        Urgency::High => &[
            "Seek immediate medical attention",
            "Go to the emergency room or call emergency services",
            "Do not delay professional medical care",
        ],
        Urgency::Medium => &[
            "Schedule an appointment with a healthcare provider within 1-2 days",
            "Monitor symptoms closely",
            "Seek immediate care if symptoms worsen",
        ],
        Urgency::Low => &[
            "Monitor symptoms for 3-5 days",
            "Try natural remedies and lifestyle changes",
            "See a healthcare provider if symptoms persist or worsen",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_capped_and_known_only() {
        let missing: Vec<String> = [
            "fever",
            "fatigue",
            "headache",
            "vomiting",
            "diarrhea",
            "chills",
            "not a symptom",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let questions = follow_up_questions(&missing);
        assert_eq!(questions.len(), 5);
        assert!(questions[0].contains("fever"));
    }

    #[test]
    fn test_urgency_tiers() {
        assert_eq!(urgency_for("heart attack", Confidence::Low), Urgency::High);
        assert_eq!(urgency_for("diabetes", Confidence::Low), Urgency::Medium);
        assert_eq!(urgency_for("common cold", Confidence::High), Urgency::Medium);
        assert_eq!(urgency_for("common cold", Confidence::Low), Urgency::Low);
    }

    #[test]
    fn test_recommendations_never_empty() {
        for urgency in [Urgency::Low, Urgency::Medium, Urgency::High] {
            assert!(!follow_up_recommendations(urgency).is_empty());
        }
    }
}
