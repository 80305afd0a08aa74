// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `leny classify` command implementation.

use std::io::Read;

use clap::Args;
use leny_classifier::{QueryRouter, RouteRequest};
use leny_config::{LenyConfig, OutputFormat};
use leny_core::{ContextCategory, LenyError, SpecialtyCategory, UserType};

use crate::output;

/// Arguments for `leny classify`.
#[derive(Args, Debug, Default)]
pub struct ClassifyArgs {
    /// Query text. Read from stdin when omitted.
    pub text: Vec<String>,

    /// Output format: text, json or json-pretty. Overrides `output.format`.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Who is asking: patient or provider. Overrides `routing.default_user_type`.
    #[arg(long)]
    pub user_type: Option<UserType>,

    /// Context to use instead of the classified one, e.g. `triage`.
    #[arg(long)]
    pub context_hint: Option<ContextCategory>,

    /// Specialty to route to when no red flag is present, e.g. `cardiology`.
    #[arg(long)]
    pub specialty_hint: Option<SpecialtyCategory>,
}

/// Runs `leny classify`, printing the routing decision to stdout.
pub fn run_classify(config: &LenyConfig, args: ClassifyArgs) -> Result<(), LenyError> {
    let text = if args.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.text.join(" ")
    };

    let format = args.format.unwrap_or(config.output.format);
    println!("{}", classify_text(config, &args, &text, format)?);
    Ok(())
}

fn classify_text(
    config: &LenyConfig,
    args: &ClassifyArgs,
    text: &str,
    format: OutputFormat,
) -> Result<String, LenyError> {
    let router = QueryRouter::new(config.routing.clone());
    let request = RouteRequest {
        text,
        user_type: args.user_type,
        context_hint: args.context_hint,
        specialty_hint: args.specialty_hint,
    };
    let decision = router.route(&request);
    output::render(&decision, format, config.output.color)
}
