//! Colloquial phrase → canonical symptom table.
//!
//! Matched on word boundaries; a synonym only fires when its canonical
//! symptom is actually present in the loaded lexicon.

/// (colloquial phrase, canonical symptom)
pub const SYNONYMS: &[(&str, &str)] = &[
    // fever
    ("burning up", "fever"),
    ("temperature", "fever"),
    ("feverish", "fever"),
    ("chills", "fever"),
    ("shivering", "fever"),
    // digestive
    ("nausea", "vomiting"),
    ("nauseous", "vomiting"),
    ("queasy", "vomiting"),
    ("throwing up", "vomiting"),
    ("throw up", "vomiting"),
    ("sick to stomach", "vomiting"),
    ("upset stomach", "stomach pain"),
    ("tummy ache", "stomach pain"),
    ("belly pain", "stomach pain"),
    ("abdominal pain", "stomach pain"),
    ("loose stool", "diarrhea"),
    ("loose stools", "diarrhea"),
    // respiratory
    ("stuffy nose", "runny nose"),
    ("blocked nose", "runny nose"),
    ("congested", "runny nose"),
    ("sniffles", "runny nose"),
    ("coughing", "cough"),
    ("short of breath", "breathlessness"),
    ("shortness of breath", "breathlessness"),
    ("wheezing", "breathlessness"),
    // skin
    ("rash", "skin rash"),
    ("bumps", "skin rash"),
    ("spots", "skin rash"),
    ("red skin", "skin rash"),
    ("itchy", "itching"),
    // head
    ("migraine", "headache"),
    ("head pain", "headache"),
    ("dizzy", "dizziness"),
    ("lightheaded", "dizziness"),
    // throat
    ("scratchy throat", "sore throat"),
    ("throat hurts", "sore throat"),
    ("swollen throat", "sore throat"),
    // energy
    ("tired", "fatigue"),
    ("exhausted", "fatigue"),
    ("worn out", "fatigue"),
    ("no energy", "fatigue"),
    ("weakness", "fatigue"),
    // stomach acid
    ("heartburn", "acidity"),
    ("acid reflux", "acidity"),
];
