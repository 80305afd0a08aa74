// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emergency ("red flag") phrase detection.
//!
//! Plain substring containment on the lower-cased text, not word-boundary
//! matching: `"chest pain-free"` still matches `"chest pain"`. The first
//! phrase found in table order wins; there is no attempt to pick the most
//! severe or most specific phrase.

use std::sync::LazyLock;

use leny_core::{LenyError, RedFlagCategory};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Emergency phrases per category. Phrases must be lower-case.
pub(crate) const RED_FLAG_TABLE: &[(RedFlagCategory, &[&str])] = &[
    (
        RedFlagCategory::Cardiovascular,
        &[
            "chest pain",
            "crushing chest pain",
            "chest pressure",
            "heart attack",
            "cardiac arrest",
            "palpitations with chest pain",
            "syncope",
            "fainting",
            "severe shortness of breath",
            "pulmonary edema",
            "cyanosis",
            "blue lips",
        ],
    ),
    (
        RedFlagCategory::Neurological,
        &[
            "severe headache",
            "worst headache of life",
            "thunderclap headache",
            "loss of consciousness",
            "unconscious",
            "coma",
            "seizure",
            "convulsions",
            "sudden weakness",
            "paralysis",
            "stroke symptoms",
            "facial drooping",
            "slurred speech",
            "confusion",
            "altered mental status",
            "vision loss",
            "double vision",
            "severe dizziness",
            "vertigo with neurological signs",
        ],
    ),
    (
        RedFlagCategory::Respiratory,
        &[
            "difficulty breathing",
            "shortness of breath",
            "can't breathe",
            "respiratory distress",
            "wheezing",
            "stridor",
            "choking",
            "pneumothorax",
            "collapsed lung",
            "severe asthma attack",
        ],
    ),
    (
        RedFlagCategory::Gastrointestinal,
        &[
            "severe abdominal pain",
            "appendicitis",
            "bowel obstruction",
            "severe vomiting",
            "hematemesis",
            "vomiting blood",
            "melena",
            "bright red blood in stool",
            "severe diarrhea",
            "dehydration",
        ],
    ),
    (
        RedFlagCategory::Infectious,
        &[
            "fever with rash",
            "meningitis",
            "sepsis",
            "high fever",
            "fever over 104",
            "fever with stiff neck",
            "petechial rash",
            "severe infection",
            "cellulitis",
            "necrotizing fasciitis",
        ],
    ),
    (
        RedFlagCategory::Trauma,
        &[
            "severe bleeding",
            "hemorrhage",
            "major trauma",
            "head injury",
            "spinal injury",
            "fracture",
            "dislocation",
            "severe burns",
            "penetrating wound",
            "gunshot",
            "stab wound",
        ],
    ),
    (
        RedFlagCategory::Obstetric,
        &[
            "pregnancy complications",
            "severe bleeding in pregnancy",
            "preeclampsia",
            "eclampsia",
            "placental abruption",
            "ectopic pregnancy",
            "miscarriage with heavy bleeding",
        ],
    ),
    (
        RedFlagCategory::Psychiatric,
        &[
            "suicidal thoughts",
            "suicide attempt",
            "homicidal thoughts",
            "psychosis",
            "severe depression",
            "manic episode",
            "substance overdose",
            "drug overdose",
            "alcohol poisoning",
        ],
    ),
    (
        RedFlagCategory::Pediatric,
        &[
            "infant fever",
            "febrile seizure",
            "difficulty breathing in child",
            "severe dehydration",
            "failure to thrive",
            "child abuse",
            "ingestion",
            "poisoning",
        ],
    ),
    (
        RedFlagCategory::Endocrine,
        &[
            "diabetic ketoacidosis",
            "severe hypoglycemia",
            "thyroid storm",
            "adrenal crisis",
            "severe hyperglycemia",
        ],
    ),
];

/// Flat search order: category order, then phrase order within a category.
static ALL_RED_FLAGS: LazyLock<Vec<RedFlagMatch>> = LazyLock::new(|| {
    RED_FLAG_TABLE
        .iter()
        .flat_map(|(category, phrases)| {
            phrases.iter().map(move |phrase| RedFlagMatch {
                category: *category,
                phrase: *phrase,
            })
        })
        .collect()
});

/// A red-flag phrase and the category it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RedFlagMatch {
    pub category: RedFlagCategory,
    pub phrase: &'static str,
}

impl RedFlagMatch {
    /// Human-readable explanation naming the matched phrase.
    pub fn reason(&self) -> String {
        format!("Query contains the term: \"{}\".", self.phrase)
    }
}

/// Outcome of a red-flag scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedFlagCheck {
    pub detected: bool,
    /// Present exactly when `detected` is true.
    pub reason: Option<String>,
    pub matched: Option<RedFlagMatch>,
}

/// Scan `text` for the first known emergency phrase.
///
/// Total over all inputs; empty text yields `detected: false`.
pub fn detect(text: &str) -> RedFlagCheck {
    let lowered = text.to_lowercase();
    match ALL_RED_FLAGS.iter().find(|m| lowered.contains(m.phrase)) {
        Some(m) => RedFlagCheck {
            detected: true,
            reason: Some(m.reason()),
            matched: Some(*m),
        },
        None => RedFlagCheck::default(),
    }
}

/// Every phrase in search order.
pub fn all_red_flags() -> &'static [RedFlagMatch] {
    &ALL_RED_FLAGS
}

/// Phrases of one category in declaration order.
pub fn red_flag_phrases(category: RedFlagCategory) -> &'static [&'static str] {
    RED_FLAG_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, phrases)| *phrases)
        .unwrap_or(&[])
}

/// Check the phrase table: each category once, in order, with clean phrases.
pub(crate) fn validate_red_flag_table() -> Result<(), LenyError> {
    let declared: Vec<RedFlagCategory> = RED_FLAG_TABLE.iter().map(|(c, _)| *c).collect();
    let expected: Vec<RedFlagCategory> = RedFlagCategory::iter().collect();
    if declared != expected {
        let category = expected
            .iter()
            .enumerate()
            .find(|(i, want)| declared.get(*i) != Some(*want))
            .map(|(_, want)| want.to_string())
            .unwrap_or_else(|| "<extra>".to_string());
        return Err(LenyError::pattern_table(
            "red_flag",
            category,
            "categories must appear once each, in declaration order",
        ));
    }

    for (category, phrases) in RED_FLAG_TABLE {
        if phrases.is_empty() {
            return Err(LenyError::pattern_table(
                "red_flag",
                category.to_string(),
                "category has no phrases",
            ));
        }
        for phrase in phrases.iter() {
            if phrase.is_empty() || phrase.trim() != *phrase || phrase.to_lowercase() != *phrase {
                return Err(LenyError::pattern_table(
                    "red_flag",
                    category.to_string(),
                    format!("phrase `{phrase}` must be non-empty, trimmed and lower-case"),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_well_formed() {
        validate_red_flag_table().unwrap();
    }

    #[test]
    fn flat_list_concatenates_categories_in_order() {
        let all = all_red_flags();
        let total: usize = RED_FLAG_TABLE.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(all.len(), total);
        assert!(all.len() > 90);
        assert_eq!(all[0].phrase, "chest pain");
        assert_eq!(all[0].category, RedFlagCategory::Cardiovascular);
        assert_eq!(all.last().unwrap().phrase, "severe hyperglycemia");
    }

    #[test]
    fn detects_phrase_with_templated_reason() {
        let check = detect("I think I have chest pain");
        assert!(check.detected);
        assert_eq!(
            check.reason.as_deref(),
            Some("Query contains the term: \"chest pain\".")
        );
        assert_eq!(check.matched.unwrap().category, RedFlagCategory::Cardiovascular);
    }

    #[test]
    fn first_phrase_in_table_order_wins() {
        // "crushing chest pain" is listed after "chest pain".
        let check = detect("crushing chest pain");
        assert_eq!(check.matched.unwrap().phrase, "chest pain");

        // Cardiovascular precedes psychiatric regardless of position in the text.
        let check = detect("suicidal thoughts and fainting");
        assert_eq!(check.matched.unwrap().phrase, "fainting");
    }

    #[test]
    fn matching_ignores_case() {
        assert!(detect("CHEST PAIN").detected);
        assert!(detect("Stroke Symptoms since noon").detected);
    }

    #[test]
    fn substring_policy_matches_inside_words() {
        // Accepted behavior: no word boundaries.
        assert!(detect("I've been chest pain-free for a week").detected);
        assert_eq!(
            detect("my glaucoma drops").matched.unwrap().phrase,
            "coma"
        );
    }

    #[test]
    fn empty_and_benign_text_is_clear() {
        assert_eq!(detect(""), RedFlagCheck::default());
        let check = detect("I have a mild headache that went away");
        assert!(!check.detected);
        assert!(check.reason.is_none());
        assert!(check.matched.is_none());
    }

    #[test]
    fn phrases_by_category() {
        let endocrine = red_flag_phrases(RedFlagCategory::Endocrine);
        assert_eq!(endocrine.len(), 5);
        assert_eq!(endocrine[0], "diabetic ketoacidosis");
        assert!(red_flag_phrases(RedFlagCategory::Psychiatric).contains(&"suicidal thoughts"));
    }
}
