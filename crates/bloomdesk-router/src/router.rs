// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The classification router: one model call per message, safe fallback.

use std::sync::Arc;

use bloomdesk_core::types::{CompletionRequest, RouterVerdict};
use bloomdesk_core::{BloomdeskError, CompletionProvider};
use tracing::debug;

use crate::verdict::parse_verdict;

/// Routing policy prompt. The model must return a bare JSON object with
/// `classification`, `clarifying_question`, and `rationale` fields.
pub const ROUTER_SYSTEM: &str = r#"You analyze customer support messages for a supplement brand. Classify each message into the correct resolution workflow, or mark it out of scope.

Decision rules:

OUT_OF_SCOPE: The message is clearly unrelated to supplement customer support or refund/return issues (e.g. random chat, unrelated products, nonsense, unrelated services).

REPLACEMENT: The customer reports any of: product arrived damaged or defective; seal broken on arrival; leaking container; missing items; wrong item shipped.

REFUND: The customer wants to return a product that is unopened and unused, with no defect claim.

STORE_CREDIT: The product was opened or used and the customer says it "didn't work," "didn't like it," has taste issues or side effects, without claiming a defect on arrival.

NEEDS_CLARIFICATION: One missing fact would change the outcome (most commonly: opened vs unopened, or defect on arrival vs dissatisfaction after use). Ask exactly one targeted clarifying question that most reduces uncertainty. Do not ask multiple questions. If the message mentions "refund" or "return" (or similar phrasing) and it does NOT clearly state whether the product was opened or used, route to NEEDS_CLARIFICATION and ask exactly this clarifying question: "Have you opened or used the product yet? Either way, I'm happy to help."

Output format: Return a JSON object only, with no other text. Use this exact structure:
{"classification": "<one of REFUND, REPLACEMENT, STORE_CREDIT, NEEDS_CLARIFICATION, OUT_OF_SCOPE>", "clarifying_question": "<one targeted question string, or null if not NEEDS_CLARIFICATION>", "rationale": "<one sentence explaining your decision>"}"#;

/// Classifies customer messages into resolution workflows.
///
/// One provider call per message, no retries at this layer: the provider
/// client already retries transient HTTP errors, and malformed output
/// degrades to a clarification request instead of another attempt.
pub struct Router {
    provider: Arc<dyn CompletionProvider>,
}

impl Router {
    /// Create a router over the given provider.
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Classify a customer message.
    ///
    /// The message is trimmed before classification. Provider transport
    /// errors propagate; malformed model output does not.
    pub async fn classify(&self, message: &str) -> Result<RouterVerdict, BloomdeskError> {
        let response = self
            .provider
            .complete(CompletionRequest {
                system: ROUTER_SYSTEM.to_string(),
                message: message.trim().to_string(),
            })
            .await?;

        let verdict = parse_verdict(&response.text);
        debug!(
            route = %verdict.route,
            has_question = verdict.clarifying_question.is_some(),
            "message classified"
        );
        Ok(verdict)
    }
}
