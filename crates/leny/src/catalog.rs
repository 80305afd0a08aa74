// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leny catalog` command implementation.

use leny_classifier::red_flag_phrases;
use leny_core::{ContextCategory, RedFlagCategory, SpecialtyCategory};
use strum::{Display, EnumString, IntoEnumIterator};

/// Which catalog to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum CatalogKind {
    /// Context categories in tie-break order.
    Contexts,
    /// Specialty categories in tie-break order.
    Specialties,
    /// Emergency phrases grouped by category, in search order.
    RedFlags,
}

/// Render a catalog listing, one entry per line.
pub fn render_catalog(kind: CatalogKind) -> String {
    match kind {
        CatalogKind::Contexts => join_lines(ContextCategory::iter()),
        CatalogKind::Specialties => join_lines(SpecialtyCategory::iter()),
        CatalogKind::RedFlags => RedFlagCategory::iter()
            .map(|category| {
                let phrases: Vec<String> = red_flag_phrases(category)
                    .iter()
                    .map(|phrase| format!("  {phrase}"))
                    .collect();
                format!("{category}\n{}", phrases.join("\n"))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn join_lines<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join("\n")
}
