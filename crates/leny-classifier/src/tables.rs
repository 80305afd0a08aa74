// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context and specialty keyword tables.
//!
//! Row order is the tie-break order and must follow the enum declaration
//! order in `leny_core::types`. Alternatives are regex fragments; they are
//! joined into one case-insensitive, word-bounded alternation per row.

use std::sync::LazyLock;

use leny_core::{ContextCategory, LenyError, SpecialtyCategory};
use leny_core::{ContextCategory as C, SpecialtyCategory as S};

use crate::patterns::{PatternSpec, PatternTable};
use crate::red_flags::validate_red_flag_table;

const CONTEXT_PATTERNS: &PatternSpec<ContextCategory> = &[
    (
        C::Symptom,
        &[
            "pain", "hurt", "ache", "sore", "feel", "feeling", "dizzy", "nauseous", "tired",
            "weak", "have", "having", "headache", "fever", "cough", "rash",
        ],
    ),
    (
        C::Diagnosis,
        &[
            "diagnosed with", "have", "told i have", "condition", "disease", "disorder",
            "diabetes", "hypertension", "arthritis", "asthma",
        ],
    ),
    (
        C::Medication,
        &[
            "taking", "prescribed", "medication", "drug", "pill", "side effects?", "adverse",
            "metformin", "lisinopril", "ibuprofen",
        ],
    ),
    (
        C::TestResult,
        &[
            "test", "lab", "blood work", "mri", "ct", "x-ray", "ultrasound", "results?",
            "showed", "found", "elevated", "high", "low", "abnormal",
        ],
    ),
    (
        C::TreatmentPlan,
        &[
            "how to treat", "treatment", "therapy", "what should i do", "next steps", "manage",
            "management",
        ],
    ),
    (
        C::Triage,
        &[
            "should i", "do i need to", "go to", "see", "visit", "emergency", "urgent", "er",
            "hospital", "serious", "worried", "concerned",
        ],
    ),
    (C::FollowUp, &["follow up", "check in", "next", "appointment"]),
    (C::Logistics, &["appointment", "schedule", "insurance", "cost", "location"]),
    (C::Other, &[]),
];

const SPECIALTY_PATTERNS: &PatternSpec<SpecialtyCategory> = &[
    (
        S::Orthopedics,
        &[
            "knee", "ankle", "shoulder", "hip", "back", "joint", "bone", "fracture", "sprain",
            "strain", "torn", "injury",
        ],
    ),
    (
        S::Cardiology,
        &["chest pain", "heart", "palpitation", "blood pressure", "cardiac", "cardiovascular"],
    ),
    (
        S::Gastroenterology,
        &[
            "stomach", "abdominal", "nausea", "vomit", "diarrhea", "constipation", "digestive",
            "bowel", "gi",
        ],
    ),
    (
        S::Neurology,
        &[
            "headache", "migraine", "dizzy", "seizure", "numbness", "weakness", "neurologic",
            "brain", "nerve",
        ],
    ),
    (
        S::Pulmonology,
        &["lung", "breath", "cough", "asthma", "copd", "pneumonia", "respiratory"],
    ),
    (
        S::InfectiousDisease,
        &["fever", "infection", "virus", "bacteria", "sepsis", "flu", "covid"],
    ),
    (
        S::Endocrinology,
        &["diabetes", "thyroid", "hormone", "metabolism", "obesity", "adrenal"],
    ),
    (S::Dermatology, &["skin", "rash", "mole", "acne", "eczema", "psoriasis"]),
    (
        S::Rheumatology,
        &["arthritis", "lupus", "rheumatoid", "joint pain", "autoimmune", "inflammatory"],
    ),
    (
        S::Psychiatry,
        &["anxiety", "depression", "stress", "mood", "bipolar", "suicidal", "psychosis"],
    ),
    // Fallbacks: reachable only as the default or through the red-flag override.
    (S::EmergencyMedicine, &[]),
    (S::InternalMedicine, &[]),
    (S::FamilyMedicine, &[]),
    (S::Pediatrics, &["child", "infant", "baby", "pediatric", "kid"]),
    (S::Geriatrics, &["elderly", "senior", "old", "geriatric"]),
    (S::CriticalCare, &["icu", "critical", "ventilator", "septic shock"]),
    (S::TraumaSurgery, &["trauma", "accident", "injury"]),
    (S::GeneralSurgery, &["surgery", "operation", "appendix", "gallbladder"]),
    (S::Neurosurgery, &["brain surgery", "spinal surgery"]),
    (S::CardiothoracicSurgery, &["heart surgery", "bypass"]),
    (S::PlasticSurgery, &["plastic surgery", "reconstruction"]),
    (S::Urology, &["urology", "kidney stone", "prostate"]),
    (S::Nephrology, &["kidney disease", "dialysis", "renal"]),
    (S::HematologyOncology, &["cancer", "chemo", "leukemia", "lymphoma", "anemia"]),
    (S::AllergyImmunology, &["allergy", "hive", "anaphylaxis", "immun"]),
    (
        S::ObstetricsGynecology,
        &["pregnant", "pregnancy", "period", "menstrual", "vagina"],
    ),
    (S::MaternalFetalMedicine, &["high risk pregnancy"]),
    (S::Psychology, &["therapy", "counseling", "psychologist"]),
    (S::AddictionMedicine, &["addiction", "overdose", "substance abuse"]),
    (S::Radiology, &["xray", "ct scan", "mri", "ultrasound", "radiology"]),
    (S::Pathology, &["biopsy", "pathology", "specimen"]),
    (S::NuclearMedicine, &["pet scan", "nuclear scan"]),
    (S::Ophthalmology, &["eye", "vision", "glaucoma", "cataract"]),
    (S::Otolaryngology, &["ent", "ear", "nose", "throat", "sinus"]),
    (S::Anesthesiology, &["anesthesia", "anesthesiologist"]),
    (S::PainManagement, &["chronic pain", "pain management"]),
    (S::PalliativeCare, &["palliative", "hospice", "end of life"]),
    (S::SportsMedicine, &["sports injury", "concussion"]),
    (S::OccupationalMedicine, &["work injury", "occupational health"]),
];

// Checked by `validate_tables` at startup.
static CONTEXT_TABLE: LazyLock<PatternTable<ContextCategory>> = LazyLock::new(|| {
    PatternTable::compile("context", CONTEXT_PATTERNS).expect("context table is well-formed")
});

static SPECIALTY_TABLE: LazyLock<PatternTable<SpecialtyCategory>> = LazyLock::new(|| {
    PatternTable::compile("specialty", SPECIALTY_PATTERNS)
        .expect("specialty table is well-formed")
});

/// The compiled context table.
pub fn context_table() -> &'static PatternTable<ContextCategory> {
    &CONTEXT_TABLE
}

/// The compiled specialty table.
pub fn specialty_table() -> &'static PatternTable<SpecialtyCategory> {
    &SPECIALTY_TABLE
}

/// Check every table and build the compiled ones.
///
/// Call once at startup so a malformed table is reported as an error before
/// the first query instead of panicking inside it.
pub fn validate_tables() -> Result<(), LenyError> {
    validate_red_flag_table()?;
    PatternTable::compile("context", CONTEXT_PATTERNS)?;
    PatternTable::compile("specialty", SPECIALTY_PATTERNS)?;

    LazyLock::force(&CONTEXT_TABLE);
    LazyLock::force(&SPECIALTY_TABLE);
    tracing::debug!(
        contexts = CONTEXT_TABLE.len(),
        specialties = SPECIALTY_TABLE.len(),
        red_flags = crate::red_flags::all_red_flags().len(),
        "classification tables ready"
    );
    Ok(())
}
