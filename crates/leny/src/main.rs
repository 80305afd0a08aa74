// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leny - keyword-based classification of medical queries.
//!
//! This is the binary entry point for the `leny` command.

mod catalog;
mod classify;
mod output;
mod shell;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use leny_config::LenyConfig;
use leny_core::LenyError;

use crate::catalog::CatalogKind;
use crate::classify::ClassifyArgs;

/// Leny - keyword-based classification of medical queries.
#[derive(Parser, Debug)]
#[command(name = "leny", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the default hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify and route one query.
    Classify(ClassifyArgs),
    /// Launch an interactive REPL session.
    Shell,
    /// List the known categories or red-flag phrases.
    Catalog {
        /// One of: contexts, specialties, red-flags.
        kind: CatalogKind,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => leny_config::load_and_validate_path(path),
        None => leny_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            leny_config::render_errors(&errors);
            return ExitCode::from(1);
        }
    };

    init_tracing(&config.service.log_level);

    if let Err(e) = leny_classifier::validate_tables() {
        eprintln!("leny: {e}");
        return exit_code(&e);
    }

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("leny: {e}");
            exit_code(&e)
        }
    }
}

fn run(command: Option<Commands>, config: &LenyConfig) -> Result<(), LenyError> {
    match command {
        Some(Commands::Classify(args)) => classify::run_classify(config, args),
        Some(Commands::Shell) => shell::run_shell(config),
        Some(Commands::Catalog { kind }) => {
            println!("{}", catalog::render_catalog(kind));
            Ok(())
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        None => {
            println!("leny: use --help for available commands");
            Ok(())
        }
    }
}

/// Map an error to the process exit code: 2 for I/O, 1 for everything else.
fn exit_code(error: &LenyError) -> ExitCode {
    match error {
        LenyError::Io { .. } => ExitCode::from(2),
        _ => ExitCode::from(1),
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `leny=<log_level>,warn`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("leny={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
