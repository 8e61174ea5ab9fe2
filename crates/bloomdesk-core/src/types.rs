// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Bloomdesk workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The five resolution workflows a customer message can route to.
///
/// Wire representation is the uppercase label (`REFUND`, `REPLACEMENT`,
/// `STORE_CREDIT`, `NEEDS_CLARIFICATION`, `OUT_OF_SCOPE`) in both serde
/// and Display/FromStr. Exactly one route applies per request; anything
/// the router cannot recognize is coerced to [`Route::NeedsClarification`]
/// at the parsing layer rather than surfaced as an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Route {
    /// Unopened/unused return, no defect claim.
    Refund,
    /// Damaged, defective, missing, or wrong item on arrival.
    Replacement,
    /// Opened/used product, dissatisfaction without a defect claim.
    StoreCredit,
    /// One missing fact would change the outcome; ask one question.
    NeedsClarification,
    /// Unrelated to supplement support or refund/return issues.
    OutOfScope,
}

/// The router's classification of a single customer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterVerdict {
    /// The selected resolution workflow.
    pub route: Route,
    /// Suggested clarifying question. Only meaningful for
    /// [`Route::NeedsClarification`]; `None` when the model omitted it.
    pub clarifying_question: Option<String>,
}

/// The per-request triage result: route, brand-voiced reply, and the
/// route-derived confidence score. Created at request start, fully
/// consumed by the end of the request.
#[derive(Debug, Clone, Serialize)]
pub struct TriageOutcome {
    pub route: Route,
    pub response: String,
    pub confidence: f64,
}

/// A single-shot completion request: one system prompt, one user message.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt selecting the model's role for this call.
    pub system: String,
    /// The user-facing content of the call.
    pub message: String,
}

/// A completion from an LLM provider.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Concatenated text content of the reply.
    pub text: String,
    /// Model that generated the reply.
    pub model: String,
    /// Reason the generation stopped, if reported.
    pub stop_reason: Option<String>,
    /// Token usage statistics.
    pub usage: TokenUsage,
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn route_display_uses_wire_labels() {
        assert_eq!(Route::Refund.to_string(), "REFUND");
        assert_eq!(Route::Replacement.to_string(), "REPLACEMENT");
        assert_eq!(Route::StoreCredit.to_string(), "STORE_CREDIT");
        assert_eq!(Route::NeedsClarification.to_string(), "NEEDS_CLARIFICATION");
        assert_eq!(Route::OutOfScope.to_string(), "OUT_OF_SCOPE");
    }

    #[test]
    fn route_from_str_round_trips_all_variants() {
        let variants = [
            Route::Refund,
            Route::Replacement,
            Route::StoreCredit,
            Route::NeedsClarification,
            Route::OutOfScope,
        ];
        assert_eq!(variants.len(), 5, "Route must have exactly 5 variants");
        for variant in variants {
            let parsed = Route::from_str(&variant.to_string()).expect("should parse back");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn route_from_str_rejects_unknown_labels() {
        assert!(Route::from_str("ESCALATE").is_err());
        assert!(Route::from_str("refund").is_err());
        assert!(Route::from_str("").is_err());
    }

    #[test]
    fn route_serde_uses_wire_labels() {
        let json = serde_json::to_string(&Route::StoreCredit).unwrap();
        assert_eq!(json, "\"STORE_CREDIT\"");
        let parsed: Route = serde_json::from_str("\"OUT_OF_SCOPE\"").unwrap();
        assert_eq!(parsed, Route::OutOfScope);
    }

    #[test]
    fn triage_outcome_serializes_route_as_string() {
        let outcome = TriageOutcome {
            route: Route::Refund,
            response: "happy to help".to_string(),
            confidence: 0.80,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["route"], "REFUND");
        assert_eq!(json["response"], "happy to help");
        assert_eq!(json["confidence"], 0.80);
    }
}
