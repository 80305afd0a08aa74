// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification: red flags, context and specialty in one pass.
//!
//! Pure and synchronous. No I/O, no shared mutable state; the tables are
//! built once and read-only afterwards, so concurrent calls need no locking.

use leny_core::{ContextCategory, SpecialtyCategory};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::red_flags::{self, RedFlagMatch};
use crate::tables::{context_table, specialty_table};

/// Structured label set for one query.
///
/// Serializes as `{ context, specialty, hasRedFlags, reason? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub context: ContextCategory,
    /// Always `emergency_medicine` when `has_red_flags` is set.
    pub specialty: SpecialtyCategory,
    pub has_red_flags: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A classification together with the red-flag phrase behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnalysis {
    pub classification: Classification,
    pub red_flag: Option<RedFlagMatch>,
}

/// Classify a query. Total over all strings, including the empty one.
pub fn classify(text: &str) -> Classification {
    analyze(text).classification
}

/// Classify a query and keep the matched red-flag phrase.
pub fn analyze(text: &str) -> QueryAnalysis {
    let check = red_flags::detect(text);
    let context = context_table().classify(text, ContextCategory::DEFAULT);
    let mut specialty = specialty_table().classify(text, SpecialtyCategory::DEFAULT);

    if check.detected {
        specialty = SpecialtyCategory::EMERGENCY;
    }

    // Query text is patient data and stays out of the logs.
    debug!(
        input_len = text.len(),
        context = %context,
        specialty = %specialty,
        has_red_flags = check.detected,
        "classified query"
    );

    QueryAnalysis {
        classification: Classification {
            context,
            specialty,
            has_red_flags: check.detected,
            reason: check.reason,
        },
        red_flag: check.matched,
    }
}
