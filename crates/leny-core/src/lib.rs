// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Leny query classifier.
//!
//! Holds the error type and the closed category enums shared by the
//! configuration, classifier and CLI crates.

pub mod error;
pub mod types;

pub use error::LenyError;
pub use types::{ContextCategory, RedFlagCategory, ResponseMode, SpecialtyCategory, UserType};
