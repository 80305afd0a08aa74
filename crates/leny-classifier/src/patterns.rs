// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic keyword-pattern scoring over an ordered category table.
//!
//! Each category owns one case-insensitive, word-bounded alternation. A
//! category's score is the number of non-overlapping matches of that
//! alternation in the text. The first-declared category with the highest
//! non-zero score wins; when nothing scores, the caller's default is
//! returned. Overlapping alternatives can double count on ambiguous input.
//! That is intended.

use std::fmt::Display;

use leny_core::LenyError;
use regex::Regex;
use strum::IntoEnumIterator;

/// Table source: a category and its keyword alternatives (regex fragments).
///
/// An empty alternative list marks a fallback category that only wins as a
/// default; it scores zero through the same counting path as every other row.
pub type PatternSpec<T> = [(T, &'static [&'static str])];

struct CategoryPattern<T> {
    category: T,
    regex: Option<Regex>,
}

impl<T> CategoryPattern<T> {
    fn score(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |regex| regex.find_iter(text).count())
    }
}

/// Compiled, immutable category table.
pub struct PatternTable<T> {
    entries: Vec<CategoryPattern<T>>,
}

impl<T> PatternTable<T>
where
    T: Copy + Eq + Display + IntoEnumIterator,
{
    /// Compile a table, checking that it lists every category of `T` exactly
    /// once in declaration order and that every alternation compiles.
    pub fn compile(name: &'static str, spec: &PatternSpec<T>) -> Result<Self, LenyError> {
        let mut expected = T::iter();
        let mut entries = Vec::with_capacity(spec.len());

        for (category, alternatives) in spec {
            match expected.next() {
                Some(want) if want == *category => {}
                Some(want) => {
                    return Err(LenyError::pattern_table(
                        name,
                        category.to_string(),
                        format!("expected `{want}` at this position"),
                    ));
                }
                None => {
                    return Err(LenyError::pattern_table(
                        name,
                        category.to_string(),
                        "listed more than once",
                    ));
                }
            }

            entries.push(CategoryPattern {
                category: *category,
                regex: compile_alternation(name, *category, alternatives)?,
            });
        }

        if let Some(missing) = expected.next() {
            return Err(LenyError::pattern_table(
                name,
                missing.to_string(),
                "category has no table entry",
            ));
        }

        Ok(Self { entries })
    }
}

impl<T: Copy> PatternTable<T> {
    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of every category, in table order.
    pub fn scores<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (T, usize)> + 'a {
        self.entries.iter().map(move |e| (e.category, e.score(text)))
    }

    /// Best-scoring category, or `default` when every score is zero.
    pub fn classify(&self, text: &str, default: T) -> T {
        let mut best: Option<(T, usize)> = None;
        for (category, score) in self.scores(text) {
            let beats_best = match best {
                Some((_, top)) => score > top,
                None => score > 0,
            };
            if beats_best {
                best = Some((category, score));
            }
        }
        best.map_or(default, |(category, _)| category)
    }
}

fn compile_alternation<T: Display>(
    table: &'static str,
    category: T,
    alternatives: &[&str],
) -> Result<Option<Regex>, LenyError> {
    if alternatives.is_empty() {
        return Ok(None);
    }
    if let Some(bad) = alternatives.iter().find(|a| a.trim().is_empty()) {
        return Err(LenyError::pattern_table(
            table,
            category.to_string(),
            format!("blank alternative `{bad}`"),
        ));
    }

    let source = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    Regex::new(&source)
        .map(Some)
        .map_err(|e| LenyError::pattern_table(table, category.to_string(), e.to_string()))
}
