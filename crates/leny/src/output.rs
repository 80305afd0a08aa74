// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of routing decisions for the terminal.

use std::fmt::Display;

use colored::Colorize;
use leny_classifier::RoutingDecision;
use leny_config::OutputFormat;
use leny_core::LenyError;

/// Render a decision in the requested format. No trailing newline.
pub fn render(
    decision: &RoutingDecision,
    format: OutputFormat,
    color: bool,
) -> Result<String, LenyError> {
    match format {
        OutputFormat::Text => Ok(render_text(decision, color)),
        OutputFormat::Json => serde_json::to_string(decision)
            .map_err(|e| LenyError::Internal(format!("failed to serialize decision: {e}"))),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(decision)
            .map_err(|e| LenyError::Internal(format!("failed to serialize decision: {e}"))),
    }
}

fn render_text(decision: &RoutingDecision, color: bool) -> String {
    let c = &decision.classification;

    let red_flag = match &decision.red_flag {
        Some(flag) => {
            let label = format!("yes ({}: \"{}\")", flag.category, flag.phrase);
            if color { label.red().bold().to_string() } else { label }
        }
        None => "no".to_string(),
    };
    let escalated = match (decision.escalated, color) {
        (true, true) => "yes".yellow().bold().to_string(),
        (true, false) => "yes".to_string(),
        (false, _) => "no".to_string(),
    };

    format!(
        "context:    {}\n\
         specialty:  {}\n\
         red flag:   {red_flag}\n\
         escalated:  {escalated}\n\
         response:   {}\n\
         reason:     {}",
        with_classified(decision.context, c.context),
        with_classified(decision.specialty, c.specialty),
        decision.response_mode,
        decision.reason,
    )
}

/// `routed`, plus the classified label when a hint replaced it.
fn with_classified<T: PartialEq + Display>(routed: T, classified: T) -> String {
    if routed == classified {
        routed.to_string()
    } else {
        format!("{routed} (classified: {classified})")
    }
}

#[cfg(test)]
mod tests {
    use leny_classifier::{QueryRouter, RouteRequest};
    use leny_core::{ContextCategory, SpecialtyCategory};

    use super::*;

    fn decide(text: &str) -> RoutingDecision {
        QueryRouter::default().route(&RouteRequest::new(text))
    }

    #[test]
    fn text_for_red_flag() {
        let out = render(&decide("crushing chest pain"), OutputFormat::Text, false).unwrap();
        assert_eq!(
            out,
            "context:    symptom\n\
             specialty:  emergency_medicine\n\
             red flag:   yes (cardiovascular: \"chest pain\")\n\
             escalated:  yes\n\
             response:   consumer\n\
             reason:     Query contains the term: \"chest pain\"."
        );
    }

    #[test]
    fn text_shows_classified_specialty_when_hinted() {
        let decision = QueryRouter::default().route(
            &RouteRequest::new("my knee is sore").specialty_hint(SpecialtyCategory::SportsMedicine),
        );
        let out = render(&decision, OutputFormat::Text, false).unwrap();
        assert!(out.contains("specialty:  sports_medicine (classified: orthopedics)"), "{out}");
        assert!(out.contains("escalated:  no"));
        assert!(out.ends_with("reason:     routine query"));
    }

    #[test]
    fn text_shows_classified_context_when_hinted() {
        let decision = QueryRouter::default().route(
            &RouteRequest::new("my knee is sore").context_hint(ContextCategory::Triage),
        );
        let out = render(&decision, OutputFormat::Text, false).unwrap();
        assert!(out.starts_with("context:    triage (classified: symptom)\n"), "{out}");
        assert!(out.contains("escalated:  yes"));
    }

    #[test]
    fn json_is_single_line() {
        let out = render(&decide(""), OutputFormat::Json, false).unwrap();
        assert!(!out.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["classification"]["context"], "symptom");
        assert_eq!(value["classification"]["hasRedFlags"], false);
        assert!(value["classification"].get("reason").is_none());
        assert!(value.get("red_flag").is_none());
    }

    #[test]
    fn pretty_json_is_indented() {
        let out = render(&decide("seizure"), OutputFormat::JsonPretty, false).unwrap();
        assert!(out.contains("\n  \"classification\": {"), "{out}");
    }
}
