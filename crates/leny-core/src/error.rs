// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Leny workspace.

use thiserror::Error;

/// The primary error type used across the Leny crates.
///
/// Classification itself is total and never returns this type. Errors come
/// from configuration, malformed category tables (programmer errors surfaced
/// at startup) and the CLI's own I/O.
#[derive(Debug, Error)]
pub enum LenyError {
    /// Configuration errors (invalid TOML, unknown keys, failed validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// A category table is malformed.
    #[error("malformed {table} table at `{category}`: {message}")]
    PatternTable {
        /// Which table failed (`context`, `specialty`, `red_flag`).
        table: &'static str,
        /// The offending category label.
        category: String,
        message: String,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LenyError {
    /// Shorthand for a [`LenyError::PatternTable`] error.
    pub fn pattern_table(
        table: &'static str,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::PatternTable {
            table,
            category: category.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_table_error_names_table_and_category() {
        let err = LenyError::pattern_table("specialty", "cardiology", "unbalanced group");
        assert_eq!(
            err.to_string(),
            "malformed specialty table at `cardiology`: unbalanced group"
        );
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<(), LenyError> {
            Err(std::io::Error::other("pipe closed"))?;
            Ok(())
        }
        let err = read().unwrap_err();
        assert!(matches!(err, LenyError::Io { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }
}
