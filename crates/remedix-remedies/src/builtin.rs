//! Built-in fallback content, used when `remedies.json` is missing or
//! malformed. Covers the conditions of the built-in lexicon.

use std::collections::BTreeMap;

use crate::records::{EmergencyActions, RemedyRecord};

fn remedy(name: &str, benefit: &str, explanation: &str) -> RemedyRecord {
    RemedyRecord {
        name: name.to_string(),
        benefit: benefit.to_string(),
        explanation: explanation.to_string(),
        usage: None,
    }
}

pub fn remedy_database() -> BTreeMap<String, Vec<RemedyRecord>> {
    let mut db = BTreeMap::new();
    db.insert(
        "viral infection".to_string(),
        vec![
            remedy(
                "Ginger Tea",
                "Boosts immunity and reduces inflammation",
                "Ginger contains gingerol which helps fight viral infections",
            ),
            remedy(
                "Turmeric Milk",
                "Natural antiseptic",
                "Curcumin in turmeric reduces internal inflammation",
            ),
        ],
    );
    db.insert(
        "common cold".to_string(),
        vec![remedy(
            "Tulsi Tea",
            "Relieves congestion",
            "Tulsi has antiviral and immunity boosting properties",
        )],
    );
    db.insert(
        "throat infection".to_string(),
        vec![remedy(
            "Salt Water Gargle",
            "Kills throat bacteria",
            "Salt reduces swelling and removes infection-causing microbes",
        )],
    );
    db.insert(
        "gastric issue".to_string(),
        vec![remedy(
            "Aloe Vera Juice",
            "Soothes stomach lining",
            "Aloe reduces acid irritation naturally",
        )],
    );
    db.insert(
        "digestive upset".to_string(),
        vec![remedy(
            "Jeera Water",
            "Improves digestion",
            "Cumin stimulates digestive enzymes",
        )],
    );
    db
}

pub fn disease_precautions() -> BTreeMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 5] = [
        (
            "viral infection",
            &["rest well", "stay hydrated", "avoid cold drinks"],
        ),
        (
            "common cold",
            &["keep warm", "drink warm fluids", "avoid dusty environments"],
        ),
        (
            "throat infection",
            &["avoid cold food", "rest your voice", "drink warm water"],
        ),
        (
            "gastric issue",
            &["eat smaller meals", "avoid spicy food", "do not lie down after eating"],
        ),
        (
            "digestive upset",
            &["drink oral rehydration solution", "eat bland food", "avoid dairy"],
        ),
    ];
    entries
        .iter()
        .map(|(c, items)| (c.to_string(), items.iter().map(|s| s.to_string()).collect()))
        .collect()
}

pub fn emergency_symptoms() -> Vec<String> {
    [
        "chest pain",
        "difficulty breathing",
        "severe bleeding",
        "unconscious",
        "seizure",
        "high fever",
        "blurred vision",
        "severe headache",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Default payload for any emergency without a condition-specific entry.
pub fn general_emergency_actions() -> EmergencyActions {
    EmergencyActions {
        actions: vec![
            "Call emergency services immediately".to_string(),
            "Do not leave the person alone".to_string(),
            "Follow dispatcher instructions".to_string(),
        ],
        warning: "Possible medical emergency detected. Seek immediate medical help.".to_string(),
    }
}
