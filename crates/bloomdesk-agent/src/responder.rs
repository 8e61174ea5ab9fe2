// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The five responder branches, keyed by [`Route`].
//!
//! Four branches delegate to the provider with a branch-specific system
//! prompt; the out-of-scope branch returns static text with no model call.

use std::sync::Arc;

use bloomdesk_core::types::{CompletionRequest, Route};
use bloomdesk_core::{BloomdeskError, CompletionProvider};

use crate::prompts;

/// Produces the final brand-voiced reply for a classified message.
pub struct Responder {
    provider: Arc<dyn CompletionProvider>,
}

impl Responder {
    /// Create a responder over the given provider.
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Produce the reply for a route.
    ///
    /// The responder sees the raw customer message (the router trims its
    /// own copy). `clarifying_question` is the router's suggestion and is
    /// only consulted on the clarification branch.
    pub async fn respond(
        &self,
        route: Route,
        message: &str,
        clarifying_question: Option<&str>,
    ) -> Result<String, BloomdeskError> {
        match route {
            Route::Refund => self.call(prompts::REFUND_SYSTEM, message).await,
            Route::Replacement => self.call(prompts::REPLACEMENT_SYSTEM, message).await,
            Route::StoreCredit => self.call(prompts::STORE_CREDIT_SYSTEM, message).await,
            Route::NeedsClarification => {
                let content = clarification_user_content(message, clarifying_question);
                self.call(prompts::CLARIFICATION_SYSTEM, &content).await
            }
            // Static reply, no model call.
            Route::OutOfScope => Ok(prompts::OUT_OF_SCOPE_REPLY.to_string()),
        }
    }

    async fn call(&self, system: &str, message: &str) -> Result<String, BloomdeskError> {
        let response = self
            .provider
            .complete(CompletionRequest {
                system: system.to_string(),
                message: message.to_string(),
            })
            .await?;
        Ok(response.text.trim().to_string())
    }
}

/// User content for the clarification branch.
///
/// When the router suggested a question, the template forwards both the
/// customer message and the suggestion; otherwise the raw message goes
/// through alone and the model invents the question.
pub fn clarification_user_content(message: &str, suggested: Option<&str>) -> String {
    match suggested {
        Some(question) => format!(
            "Customer message: {message}\n\nUse this clarifying question (and add brief reassurance): {question}"
        ),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomdesk_test_utils::MockProvider;

    fn responder_with(responses: Vec<&str>) -> (Responder, Arc<MockProvider>) {
        let provider = Arc::new(MockProvider::with_responses(
            responses.into_iter().map(String::from).collect(),
        ));
        (Responder::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn refund_branch_uses_refund_prompt_and_raw_message() {
        let (responder, provider) = responder_with(vec!["Great news, you're eligible!"]);
        let reply = responder
            .respond(Route::Refund, "  unopened, want a refund  ", None)
            .await
            .unwrap();

        assert_eq!(reply, "Great news, you're eligible!");
        let requests = provider.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].system, prompts::REFUND_SYSTEM);
        // The responder forwards the message untouched.
        assert_eq!(requests[0].message, "  unopened, want a refund  ");
    }

    #[tokio::test]
    async fn replacement_and_store_credit_select_their_prompts() {
        let (responder, provider) = responder_with(vec!["r1", "r2"]);
        responder
            .respond(Route::Replacement, "arrived broken", None)
            .await
            .unwrap();
        responder
            .respond(Route::StoreCredit, "didn't like the taste", None)
            .await
            .unwrap();

        let requests = provider.requests().await;
        assert_eq!(requests[0].system, prompts::REPLACEMENT_SYSTEM);
        assert_eq!(requests[1].system, prompts::STORE_CREDIT_SYSTEM);
    }

    #[tokio::test]
    async fn reply_text_is_trimmed() {
        let (responder, _) = responder_with(vec!["  \nSo sorry about that!\n  "]);
        let reply = responder
            .respond(Route::Replacement, "wrong item", None)
            .await
            .unwrap();
        assert_eq!(reply, "So sorry about that!");
    }

    #[tokio::test]
    async fn clarification_forwards_suggested_question() {
        let (responder, provider) = responder_with(vec!["Is the bottle unopened?"]);
        responder
            .respond(
                Route::NeedsClarification,
                "I want a refund",
                Some("Have you opened the product yet?"),
            )
            .await
            .unwrap();

        let requests = provider.requests().await;
        assert_eq!(requests[0].system, prompts::CLARIFICATION_SYSTEM);
        assert!(requests[0].message.contains("Customer message: I want a refund"));
        assert!(requests[0]
            .message
            .contains("Use this clarifying question (and add brief reassurance): Have you opened the product yet?"));
    }

    #[tokio::test]
    async fn clarification_without_suggestion_sends_raw_message() {
        let (responder, provider) = responder_with(vec!["What seems to be the issue?"]);
        responder
            .respond(Route::NeedsClarification, "help with my order", None)
            .await
            .unwrap();

        let requests = provider.requests().await;
        assert_eq!(requests[0].message, "help with my order");
    }

    #[tokio::test]
    async fn out_of_scope_returns_static_reply_without_model_call() {
        let (responder, provider) = responder_with(vec!["should never be used"]);
        let reply = responder
            .respond(Route::OutOfScope, "what's the weather?", None)
            .await
            .unwrap();

        assert_eq!(reply, prompts::OUT_OF_SCOPE_REPLY);
        assert_eq!(provider.call_count().await, 0);
    }

    #[test]
    fn clarification_user_content_templates() {
        let with = clarification_user_content("msg", Some("q?"));
        assert_eq!(
            with,
            "Customer message: msg\n\nUse this clarifying question (and add brief reassurance): q?"
        );
        assert_eq!(clarification_user_content("msg", None), "msg");
    }
}
