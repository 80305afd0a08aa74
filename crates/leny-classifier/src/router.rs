// SPDX-FileCopyrightText: 2026 Leny Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing decisions on top of a classification.
//!
//! Decides the context and specialty to route to, the response mode, and
//! whether the query must be escalated. Specialty precedence: red flag >
//! caller hint > classified specialty. A context hint replaces the classified
//! context, including for the triage escalation check.

use leny_config::RoutingConfig;
use leny_core::{ContextCategory, ResponseMode, SpecialtyCategory, UserType};
use serde::Serialize;
use tracing::info;

use crate::classifier::{analyze, Classification};
use crate::red_flags::RedFlagMatch;

/// Reason reported for a triage escalation.
pub const TRIAGE_REASON: &str = "triage question";

/// Reason reported when nothing escalates.
pub const ROUTINE_REASON: &str = "routine query";

/// A query to route.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteRequest<'a> {
    pub text: &'a str,
    /// Falls back to the configured default user type.
    pub user_type: Option<UserType>,
    pub context_hint: Option<ContextCategory>,
    pub specialty_hint: Option<SpecialtyCategory>,
}

impl<'a> RouteRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    pub fn user_type(mut self, user_type: UserType) -> Self {
        self.user_type = Some(user_type);
        self
    }

    pub fn context_hint(mut self, context: ContextCategory) -> Self {
        self.context_hint = Some(context);
        self
    }

    pub fn specialty_hint(mut self, specialty: SpecialtyCategory) -> Self {
        self.specialty_hint = Some(specialty);
        self
    }
}

/// Outcome of routing one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    pub classification: Classification,
    /// Context after applying the hint; may differ from the classified one.
    pub context: ContextCategory,
    /// Specialty after applying the hint; may differ from the classified one.
    pub specialty: SpecialtyCategory,
    pub user_type: UserType,
    pub response_mode: ResponseMode,
    pub escalated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_flag: Option<RedFlagMatch>,
    pub reason: String,
}

/// Routes classified queries according to [`RoutingConfig`].
pub struct QueryRouter {
    config: RoutingConfig,
}

impl QueryRouter {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Classify and route a query.
    pub fn route(&self, request: &RouteRequest<'_>) -> RoutingDecision {
        let analysis = analyze(request.text);
        let classification = analysis.classification;
        let user_type = request.user_type.unwrap_or(self.config.default_user_type);

        let specialty = match (analysis.red_flag, request.specialty_hint) {
            (Some(_), _) => SpecialtyCategory::EMERGENCY,
            (None, Some(hint)) => hint,
            (None, None) => classification.specialty,
        };

        let context = request.context_hint.unwrap_or(classification.context);
        let triage = self.config.escalate_triage && context == ContextCategory::Triage;

        let (escalated, reason) = match (&analysis.red_flag, &classification.reason) {
            (Some(flag), Some(reason)) => {
                info!(
                    category = %flag.category,
                    phrase = flag.phrase,
                    "red flag detected, escalating"
                );
                (true, reason.clone())
            }
            _ if triage => {
                info!(specialty = %specialty, "triage question, escalating");
                (true, TRIAGE_REASON.to_string())
            }
            _ => (false, ROUTINE_REASON.to_string()),
        };

        RoutingDecision {
            context,
            specialty,
            user_type,
            response_mode: ResponseMode::from(user_type),
            escalated,
            red_flag: analysis.red_flag,
            reason,
            classification,
        }
    }
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new(RoutingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use leny_core::RedFlagCategory;

    use super::*;

    #[test]
    fn routine_query_is_not_escalated() {
        let decision = QueryRouter::default().route(&RouteRequest::new(
            "I sprained my ankle playing basketball yesterday",
        ));
        assert!(!decision.escalated);
        assert_eq!(decision.specialty, SpecialtyCategory::Orthopedics);
        assert_eq!(decision.reason, ROUTINE_REASON);
        assert_eq!(decision.user_type, UserType::Patient);
        assert_eq!(decision.response_mode, ResponseMode::Consumer);
        assert!(decision.red_flag.is_none());
    }

    #[test]
    fn red_flag_escalates_and_beats_hint() {
        let request = RouteRequest::new("sudden chest pressure at rest")
            .specialty_hint(SpecialtyCategory::Dermatology);
        let decision = QueryRouter::default().route(&request);
        assert!(decision.escalated);
        assert_eq!(decision.specialty, SpecialtyCategory::EmergencyMedicine);
        assert_eq!(decision.red_flag.unwrap().category, RedFlagCategory::Cardiovascular);
        assert_eq!(decision.reason, "Query contains the term: \"chest pressure\".");
    }

    #[test]
    fn hint_overrides_classified_specialty() {
        let request = RouteRequest::new("my knee is sore")
            .specialty_hint(SpecialtyCategory::SportsMedicine);
        let decision = QueryRouter::default().route(&request);
        assert_eq!(decision.specialty, SpecialtyCategory::SportsMedicine);
        assert_eq!(decision.classification.specialty, SpecialtyCategory::Orthopedics);
    }

    #[test]
    fn triage_context_escalates_when_enabled() {
        // "should i", "go to", "hospital", "worried": triage outscores symptom.
        let text = "should i go to the hospital, i am worried";
        let decision = QueryRouter::default().route(&RouteRequest::new(text));
        assert_eq!(decision.classification.context, ContextCategory::Triage);
        assert!(decision.escalated);
        assert_eq!(decision.reason, TRIAGE_REASON);
    }

    #[test]
    fn triage_escalation_can_be_disabled() {
        let router = QueryRouter::new(RoutingConfig {
            escalate_triage: false,
            ..RoutingConfig::default()
        });
        let decision = router.route(&RouteRequest::new("should i go to the hospital, i am worried"));
        assert!(!decision.escalated);
        assert_eq!(decision.reason, ROUTINE_REASON);
    }

    #[test]
    fn triage_hint_escalates() {
        let request = RouteRequest::new("my knee is sore").context_hint(ContextCategory::Triage);
        let decision = QueryRouter::default().route(&request);
        assert_eq!(decision.classification.context, ContextCategory::Symptom);
        assert_eq!(decision.context, ContextCategory::Triage);
        assert!(decision.escalated);
        assert_eq!(decision.reason, TRIAGE_REASON);
    }

    #[test]
    fn non_triage_hint_suppresses_triage_escalation() {
        let request = RouteRequest::new("should i go to the hospital, i am worried")
            .context_hint(ContextCategory::FollowUp);
        let decision = QueryRouter::default().route(&request);
        assert_eq!(decision.classification.context, ContextCategory::Triage);
        assert_eq!(decision.context, ContextCategory::FollowUp);
        assert!(!decision.escalated);
        assert_eq!(decision.reason, ROUTINE_REASON);
    }

    #[test]
    fn context_hint_does_not_mask_red_flag() {
        let request = RouteRequest::new("sudden paralysis").context_hint(ContextCategory::Logistics);
        let decision = QueryRouter::default().route(&request);
        assert!(decision.escalated);
        assert_eq!(decision.specialty, SpecialtyCategory::EmergencyMedicine);
    }

    #[test]
    fn provider_gets_professional_mode() {
        let decision = QueryRouter::default()
            .route(&RouteRequest::new("lisinopril dosing").user_type(UserType::Provider));
        assert_eq!(decision.response_mode, ResponseMode::Professional);
    }

    #[test]
    fn configured_default_user_type_applies() {
        let router = QueryRouter::new(RoutingConfig {
            default_user_type: UserType::Provider,
            ..RoutingConfig::default()
        });
        let decision = router.route(&RouteRequest::new("metformin"));
        assert_eq!(decision.user_type, UserType::Provider);
        assert_eq!(decision.response_mode, ResponseMode::Professional);
    }

    #[test]
    fn decision_serializes_with_nested_classification() {
        let decision = QueryRouter::default().route(&RouteRequest::new("I fainted, now confusion"));
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["classification"]["hasRedFlags"], true);
        assert_eq!(json["specialty"], "emergency_medicine");
        assert_eq!(json["context"], json["classification"]["context"]);
        assert_eq!(json["response_mode"], "consumer");
        assert_eq!(json["red_flag"]["category"], "neurological");
        assert_eq!(json["red_flag"]["phrase"], "confusion");
    }
}
