// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Leny query classifier.
//!
//! TOML configuration with strict key checking, a system/user/local file
//! hierarchy, `LENY_*` environment overrides, and miette diagnostics with
//! typo suggestions.
//!
//! ```no_run
//! let config = leny_config::load_and_validate().expect("config errors");
//! println!("log level: {}", config.service.log_level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{LenyConfig, OutputConfig, OutputFormat, RoutingConfig, ServiceConfig};

/// Load configuration from the file hierarchy and validate it.
pub fn load_and_validate() -> Result<LenyConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load configuration from an inline TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<LenyConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load configuration from one explicit file and validate it.
///
/// Unlike the hierarchy lookup, a missing file is an error here: the user
/// asked for it by name.
pub fn load_and_validate_path(path: &Path) -> Result<LenyConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "config file `{}` does not exist",
            path.display()
        ))]);
    }
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

#[allow(clippy::result_large_err)]
fn finish(
    loaded: Result<LenyConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<LenyConfig, Vec<ConfigError>> {
    match loaded {
        Ok(mut config) => {
            validation::validate_config(&config)?;
            // The tracing filter directive needs the canonical spelling.
            config.service.log_level = config.service.log_level.trim().to_ascii_lowercase();
            tracing::debug!(
                log_level = config.service.log_level.as_str(),
                format = %config.output.format,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Read the hierarchy's TOML files for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG_FILE))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG_FILE.into());

    [Some(local), loader::user_config_path(), Some(loader::SYSTEM_CONFIG_PATH.into())]
        .into_iter()
        .flatten()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn inline_config_validates() {
        let config = load_and_validate_str("[service]\nlog_level = \"warn\"\n").unwrap();
        assert_eq!(config.service.log_level, "warn");
    }

    #[test]
    fn log_level_is_normalized() {
        let config = load_and_validate_str("[service]\nlog_level = \" DEBUG \"\n").unwrap();
        assert_eq!(config.service.log_level, "debug");
    }

    #[test]
    fn inline_validation_failure_is_reported() {
        let errors = load_and_validate_str("[service]\nlog_level = \"chatty\"\n").unwrap_err();
        assert!(matches!(errors[0], ConfigError::Validation { .. }));
    }

    #[test]
    fn inline_unknown_key_is_reported() {
        let errors = load_and_validate_str("[routing]\nescalate = true\n").unwrap_err();
        assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let errors = load_and_validate_path(Path::new("/nonexistent/leny.toml")).unwrap_err();
        assert!(errors[0].to_string().contains("does not exist"));
    }

    #[test]
    fn explicit_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[routing]\nescalate_triage = false").unwrap();
        let config = load_and_validate_path(file.path()).unwrap();
        assert!(!config.routing.escalate_triage);
    }
}
