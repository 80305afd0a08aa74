// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leny shell` command implementation.
//!
//! Interactive REPL with readline history. Every line is classified and
//! routed with the loaded configuration and printed as text.

use colored::Colorize;
use leny_classifier::{QueryRouter, RouteRequest};
use leny_config::{LenyConfig, OutputFormat};
use leny_core::LenyError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::output;

/// Runs the `leny shell` interactive REPL.
pub fn run_shell(config: &LenyConfig) -> Result<(), LenyError> {
    let router = QueryRouter::new(config.routing.clone());

    let mut rl = DefaultEditor::new()
        .map_err(|e| LenyError::Internal(format!("failed to initialize readline: {e}")))?;

    let name = config.service.name.as_str();
    let color = config.output.color;
    println!("{}", banner(name, color));
    println!("Type {} to exit.\n", paint("quit", color, |s| s.yellow().to_string()));

    let line_prompt = prompt(name, color);
    loop {
        match rl.readline(&line_prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if is_exit(trimmed) {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let decision = router.route(&RouteRequest::new(trimmed));
                let rendered = output::render(&decision, OutputFormat::Text, color)?;
                println!("{rendered}\n");
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    Ok(())
}

fn banner(name: &str, color: bool) -> String {
    paint(&format!("{name} shell"), color, |s| s.bold().green().to_string())
}

fn prompt(name: &str, color: bool) -> String {
    format!("{}> ", paint(name, color, |s| s.green().to_string()))
}

fn paint(text: &str, color: bool, style: impl FnOnce(&str) -> String) -> String {
    if color { style(text) } else { text.to_string() }
}

fn is_exit(line: &str) -> bool {
    matches!(
        line.trim_start_matches('/').to_ascii_lowercase().as_str(),
        "exit" | "quit"
    )
}
