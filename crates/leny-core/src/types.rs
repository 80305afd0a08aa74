// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category labels shared by the classifier, the router and the CLI.
//!
//! Variant declaration order is significant: the classifier tables are laid
//! out in the same order, and ties between equally scored categories go to
//! the one declared first.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Conversational intent of a query.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContextCategory {
    Symptom,
    Diagnosis,
    Medication,
    TestResult,
    TreatmentPlan,
    Triage,
    FollowUp,
    Logistics,
    Other,
}

impl ContextCategory {
    /// Used when no context pattern matches.
    pub const DEFAULT: Self = Self::Symptom;
}

/// Medical domain a query is routed to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpecialtyCategory {
    Orthopedics,
    Cardiology,
    Gastroenterology,
    Neurology,
    Pulmonology,
    InfectiousDisease,
    Endocrinology,
    Dermatology,
    Rheumatology,
    Psychiatry,
    EmergencyMedicine,
    InternalMedicine,
    FamilyMedicine,
    Pediatrics,
    Geriatrics,
    CriticalCare,
    TraumaSurgery,
    GeneralSurgery,
    Neurosurgery,
    CardiothoracicSurgery,
    PlasticSurgery,
    Urology,
    Nephrology,
    HematologyOncology,
    AllergyImmunology,
    ObstetricsGynecology,
    MaternalFetalMedicine,
    Psychology,
    AddictionMedicine,
    Radiology,
    Pathology,
    NuclearMedicine,
    Ophthalmology,
    Otolaryngology,
    Anesthesiology,
    PainManagement,
    PalliativeCare,
    SportsMedicine,
    OccupationalMedicine,
}

impl SpecialtyCategory {
    /// Used when no specialty pattern matches.
    pub const DEFAULT: Self = Self::FamilyMedicine;

    /// Forced whenever a red flag is detected.
    pub const EMERGENCY: Self = Self::EmergencyMedicine;
}

/// Group of emergency phrases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RedFlagCategory {
    Cardiovascular,
    Neurological,
    Respiratory,
    Gastrointestinal,
    Infectious,
    Trauma,
    Obstetric,
    Psychiatric,
    Pediatric,
    Endocrine,
}

/// Who is asking.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Patient,
    Provider,
}

/// Register of the response the downstream prompt should ask for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    Consumer,
    Professional,
}

impl From<UserType> for ResponseMode {
    fn from(user_type: UserType) -> Self {
        match user_type {
            UserType::Patient => ResponseMode::Consumer,
            UserType::Provider => ResponseMode::Professional,
        }
    }
}
