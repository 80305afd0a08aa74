// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently ignored.

use leny_core::{LenyError, UserType};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level Leny configuration.
///
/// Every section is optional and defaults to sensible values, so an empty
/// file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LenyConfig {
    /// Service identity and logging.
    #[serde(default)]
    pub service: ServiceConfig,

    /// How classification results are printed.
    #[serde(default)]
    pub output: OutputConfig,

    /// Escalation and routing behavior.
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl LenyConfig {
    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, LenyError> {
        toml::to_string_pretty(self).map_err(|e| LenyError::Config(e.to_string()))
    }
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name for the interactive shell banner and prompt.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "leny".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format for `classify`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Colorize text output.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// Rendering of a classification result.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable block.
    #[default]
    Text,
    /// Single-line JSON.
    Json,
    /// Indented JSON.
    JsonPretty,
}

/// Escalation and routing configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Escalate queries classified as `triage` even without a red flag.
    #[serde(default = "default_escalate_triage")]
    pub escalate_triage: bool,

    /// User type assumed when a request does not name one.
    #[serde(default)]
    pub default_user_type: UserType,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            escalate_triage: default_escalate_triage(),
            default_user_type: UserType::default(),
        }
    }
}

fn default_escalate_triage() -> bool {
    true
}
