//! Built-in fallback tables, used when `symptoms.json` is missing or
//! malformed. Small but complete enough to keep every pipeline stage
//! functional.

use std::collections::BTreeMap;

/// Canonical symptom → primary condition.
pub fn symptom_map() -> BTreeMap<String, String> {
    let entries = [
        ("fever", "viral infection"),
        ("high temperature", "viral infection"),
        ("body pain", "viral infection"),
        ("fatigue", "viral infection"),
        ("cold", "common cold"),
        ("runny nose", "common cold"),
        ("sneezing", "common cold"),
        ("cough", "respiratory irritation"),
        ("dry cough", "respiratory irritation"),
        ("sore throat", "throat infection"),
        ("throat pain", "throat infection"),
        ("headache", "stress or dehydration"),
        ("acidity", "gastric issue"),
        ("burning sensation", "gastric issue"),
        ("stomach pain", "gastric issue"),
        ("vomiting", "digestive upset"),
        ("loose motion", "digestive upset"),
        ("diarrhea", "digestive upset"),
        ("skin rash", "allergic reaction"),
        ("itching", "allergic reaction"),
    ];
    entries
        .iter()
        .map(|(s, c)| (s.to_string(), c.to_string()))
        .collect()
}

/// Condition → associated symptom list.
pub fn disease_symptoms() -> BTreeMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 8] = [
        (
            "viral infection",
            &["fever", "high temperature", "body pain", "fatigue", "headache", "chills"],
        ),
        (
            "common cold",
            &["cold", "runny nose", "sneezing", "sore throat", "cough", "headache"],
        ),
        (
            "respiratory irritation",
            &["cough", "dry cough", "wheezing"],
        ),
        (
            "throat infection",
            &["sore throat", "throat pain", "fever", "difficulty swallowing"],
        ),
        (
            "stress or dehydration",
            &["headache", "fatigue", "dizziness"],
        ),
        (
            "gastric issue",
            &["acidity", "burning sensation", "stomach pain"],
        ),
        (
            "digestive upset",
            &["vomiting", "loose motion", "diarrhea", "stomach pain"],
        ),
        (
            "allergic reaction",
            &["skin rash", "itching", "sneezing"],
        ),
    ];
    entries
        .iter()
        .map(|(c, syms)| (c.to_string(), syms.iter().map(|s| s.to_string()).collect()))
        .collect()
}
