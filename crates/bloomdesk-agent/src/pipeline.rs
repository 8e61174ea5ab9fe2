// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two-step triage pipeline: classify, then respond.

use std::sync::Arc;

use bloomdesk_core::types::TriageOutcome;
use bloomdesk_core::{BloomdeskError, CompletionProvider};
use bloomdesk_router::{confidence_for, Router};
use tracing::info;

use crate::responder::Responder;

/// Stateless classify-then-respond pipeline.
///
/// Holds one shared provider for the router and all responder branches.
/// Each call to [`handle`](TriagePipeline::handle) is independent; nothing
/// survives the request.
pub struct TriagePipeline {
    router: Router,
    responder: Responder,
}

impl TriagePipeline {
    /// Create a pipeline over the given provider.
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            router: Router::new(provider.clone()),
            responder: Responder::new(provider),
        }
    }

    /// Triage one customer message: route it, produce the branch reply,
    /// and attach the route-derived confidence.
    pub async fn handle(&self, message: &str) -> Result<TriageOutcome, BloomdeskError> {
        let verdict = self.router.classify(message).await?;
        info!(route = %verdict.route, "routing customer message");

        let response = self
            .responder
            .respond(
                verdict.route,
                message,
                verdict.clarifying_question.as_deref(),
            )
            .await?;

        Ok(TriageOutcome {
            route: verdict.route,
            response,
            confidence: confidence_for(verdict.route),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomdesk_core::types::Route;
    use bloomdesk_test_utils::MockProvider;

    fn pipeline_with(responses: Vec<&str>) -> (TriagePipeline, Arc<MockProvider>) {
        let provider = Arc::new(MockProvider::with_responses(
            responses.into_iter().map(String::from).collect(),
        ));
        (TriagePipeline::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn refund_flow_makes_two_calls() {
        let (pipeline, provider) = pipeline_with(vec![
            r#"{"classification": "REFUND", "clarifying_question": null, "rationale": "unopened"}"#,
            "You're all set for a refund!",
        ]);

        let outcome = pipeline.handle("unopened bottle, money back please").await.unwrap();
        assert_eq!(outcome.route, Route::Refund);
        assert_eq!(outcome.response, "You're all set for a refund!");
        assert_eq!(outcome.confidence, 0.80);
        assert_eq!(provider.call_count().await, 2);
    }

    #[tokio::test]
    async fn malformed_router_output_routes_to_clarification() {
        let (pipeline, _) = pipeline_with(vec![
            "the model rambled instead of answering",
            "Could you tell me whether the bottle is opened?",
        ]);

        let outcome = pipeline.handle("I want to return this").await.unwrap();
        assert_eq!(outcome.route, Route::NeedsClarification);
        assert_eq!(outcome.confidence, 0.55);
    }

    #[tokio::test]
    async fn out_of_scope_makes_exactly_one_call() {
        let (pipeline, provider) = pipeline_with(vec![
            r#"{"classification": "OUT_OF_SCOPE", "clarifying_question": null, "rationale": "unrelated"}"#,
        ]);

        let outcome = pipeline.handle("what's the capital of France?").await.unwrap();
        assert_eq!(outcome.route, Route::OutOfScope);
        assert_eq!(outcome.confidence, 0.70);
        // Only the router called the model; the reply is static.
        assert_eq!(provider.call_count().await, 1);
        assert!(outcome.response.contains("Bloom Supplements"));
    }

    #[tokio::test]
    async fn clarifying_question_flows_from_router_to_responder() {
        let (pipeline, provider) = pipeline_with(vec![
            r#"{"classification": "NEEDS_CLARIFICATION", "clarifying_question": "Have you opened it?", "rationale": "ambiguous"}"#,
            "Quick question: have you opened it? Either way, we can help!",
        ]);

        let outcome = pipeline.handle("refund please").await.unwrap();
        assert_eq!(outcome.route, Route::NeedsClarification);

        let requests = provider.requests().await;
        assert_eq!(requests.len(), 2);
        assert!(requests[1].message.contains("Have you opened it?"));
    }

    #[tokio::test]
    async fn responder_receives_raw_message_router_receives_trimmed() {
        let (pipeline, provider) = pipeline_with(vec![
            r#"{"classification": "STORE_CREDIT", "clarifying_question": null, "rationale": "opened"}"#,
            "Store credit it is!",
        ]);

        pipeline.handle("  opened it, tastes awful  ").await.unwrap();

        let requests = provider.requests().await;
        assert_eq!(requests[0].message, "opened it, tastes awful");
        assert_eq!(requests[1].message, "  opened it, tastes awful  ");
    }
}
