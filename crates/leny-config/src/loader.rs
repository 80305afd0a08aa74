// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `./leny.toml` > `~/.config/leny/leny.toml` > `/etc/leny/leny.toml`,
//! with `LENY_*` environment variables on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LenyConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/leny/leny.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "leny.toml";

/// Per-user configuration file under the platform config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("leny").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/leny/leny.toml`
/// 3. `~/.config/leny/leny.toml`
/// 4. `./leny.toml`
/// 5. `LENY_*` environment variables
pub fn load_config() -> Result<LenyConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from an inline TOML string only.
pub fn load_config_from_str(toml_content: &str) -> Result<LenyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LenyConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, still honoring env overrides.
pub fn load_config_from_path(path: &Path) -> Result<LenyConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LenyConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the hierarchical Figment before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(LenyConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `LENY_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `log_level` and `escalate_triage` contain underscores themselves.
fn env_provider() -> Env {
    Env::prefixed("LENY_").map(|key| map_env_key(&key.as_str().to_ascii_lowercase()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    key.replacen("service_", "service.", 1)
        .replacen("output_", "output.", 1)
        .replacen("routing_", "routing.", 1)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::OutputFormat;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("service_log_level"), "service.log_level");
        assert_eq!(map_env_key("output_format"), "output.format");
        assert_eq!(map_env_key("routing_escalate_triage"), "routing.escalate_triage");
        assert_eq!(
            map_env_key("routing_default_user_type"),
            "routing.default_user_type"
        );
    }

    #[test]
    fn env_vars_override_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[output]\nformat = \"text\"\n")?;
            jail.set_env("LENY_SERVICE_LOG_LEVEL", "debug");
            jail.set_env("LENY_OUTPUT_FORMAT", "json");
            jail.set_env("LENY_ROUTING_ESCALATE_TRIAGE", "false");
            jail.set_env("LENY_ROUTING_DEFAULT_USER_TYPE", "provider");

            let config = load_config_from_path(Path::new(LOCAL_CONFIG_FILE))?;
            assert_eq!(config.service.log_level, "debug");
            assert_eq!(config.output.format, OutputFormat::Json);
            assert!(!config.routing.escalate_triage);
            assert_eq!(config.routing.default_user_type, leny_core::UserType::Provider);
            Ok(())
        });
    }

    #[test]
    fn inline_toml_overrides_defaults() {
        let config = load_config_from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
        assert_eq!(config.service.name, "leny");
    }

    #[test]
    fn explicit_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nname = \"triage-desk\"").unwrap();
        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.service.name, "triage-desk");
    }

    #[test]
    fn missing_explicit_path_falls_back_to_defaults() {
        let config = load_config_from_path(Path::new("/nonexistent/leny.toml")).unwrap();
        assert_eq!(config.service.name, "leny");
    }

    #[test]
    fn unknown_key_fails_extraction() {
        let result = load_config_from_str("[service]\nnaem = \"x\"\n");
        assert!(result.is_err());
    }
}
