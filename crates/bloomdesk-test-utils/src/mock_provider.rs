// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock LLM provider for deterministic testing.
//!
//! `MockProvider` implements `CompletionProvider` with pre-configured
//! responses, enabling fast, CI-runnable tests without external API calls.
//! Every request the mock receives is recorded, so tests can assert which
//! system prompt a branch used -- and that a branch made no call at all.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bloomdesk_core::traits::CompletionProvider;
use bloomdesk_core::types::{CompletionRequest, CompletionResponse, TokenUsage};
use bloomdesk_core::BloomdeskError;

/// A mock LLM provider that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty,
/// a default "mock response" text is returned.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of completion calls received so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Pop the next response, or return the default.
    async fn next_response(&self) -> String {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, BloomdeskError> {
        self.requests.lock().await.push(request);
        let text = self.next_response().await;
        Ok(CompletionResponse {
            text,
            model: "mock-model".to_string(),
            stop_reason: Some("end_turn".to_string()),
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 20,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(message: &str) -> CompletionRequest {
        CompletionRequest {
            system: "test system".to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn default_response_when_queue_empty() {
        let provider = MockProvider::new();
        let resp = provider.complete(req("hi")).await.unwrap();
        assert_eq!(resp.text, "mock response");
    }

    #[tokio::test]
    async fn queued_responses_returned_in_order() {
        let provider = MockProvider::with_responses(vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ]);

        assert_eq!(provider.complete(req("a")).await.unwrap().text, "first");
        assert_eq!(provider.complete(req("b")).await.unwrap().text, "second");
        assert_eq!(provider.complete(req("c")).await.unwrap().text, "third");
        // Queue exhausted, falls back to default
        assert_eq!(
            provider.complete(req("d")).await.unwrap().text,
            "mock response"
        );
    }

    #[tokio::test]
    async fn requests_are_recorded_in_order() {
        let provider = MockProvider::new();
        provider.complete(req("one")).await.unwrap();
        provider.complete(req("two")).await.unwrap();

        let requests = provider.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].message, "one");
        assert_eq!(requests[1].message, "two");
        assert_eq!(provider.call_count().await, 2);
    }

    #[tokio::test]
    async fn add_response_after_construction() {
        let provider = MockProvider::new();
        provider.add_response("dynamic response".to_string()).await;
        assert_eq!(
            provider.complete(req("x")).await.unwrap().text,
            "dynamic response"
        );
    }
}
