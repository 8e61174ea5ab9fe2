// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for LLM completion backends.

use async_trait::async_trait;

use crate::error::BloomdeskError;
use crate::types::{CompletionRequest, CompletionResponse};

/// A single-shot LLM completion backend.
///
/// The router and every responder branch drive the model through this
/// seam, so tests can substitute a deterministic mock and the service
/// never depends on a concrete API client above the provider crate.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one completion request and returns the full reply.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, BloomdeskError>;
}
