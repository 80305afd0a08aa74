// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic classification and routing of medical queries.
//!
//! This crate provides:
//! - [`classify`]: red-flag detection plus context and specialty scoring,
//!   with an emergency override when a red flag is present
//! - [`QueryRouter`]: escalation, specialty hint and response-mode decisions
//!   on top of a classification
//!
//! Everything is keyword based and deterministic. There is no model call,
//! no I/O and no mutable state, so every function is safe to call from any
//! number of threads.

pub mod classifier;
pub mod patterns;
pub mod red_flags;
pub mod router;
pub mod tables;

pub use classifier::{analyze, classify, Classification, QueryAnalysis};
pub use patterns::{PatternSpec, PatternTable};
pub use red_flags::{all_red_flags, detect, red_flag_phrases, RedFlagCheck, RedFlagMatch};
pub use router::{QueryRouter, RouteRequest, RoutingDecision};
pub use tables::{context_table, specialty_table, validate_tables};
