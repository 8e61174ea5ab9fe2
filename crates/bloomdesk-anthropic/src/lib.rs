// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude provider adapter for the Bloomdesk triage service.
//!
//! Implements [`CompletionProvider`] over the Anthropic Messages API for
//! single-shot completions. The router and every responder branch share one
//! provider instance.

pub mod client;
pub mod types;

use async_trait::async_trait;
use bloomdesk_config::BloomdeskConfig;
use bloomdesk_core::error::BloomdeskError;
use bloomdesk_core::traits::CompletionProvider;
use bloomdesk_core::types::{CompletionRequest, CompletionResponse, TokenUsage};
use tracing::info;

use crate::client::AnthropicClient;
use crate::types::{ApiMessage, MessageRequest, ResponseContentBlock};

/// Anthropic Claude provider implementing [`CompletionProvider`].
///
/// API key resolution order: config -> `ANTHROPIC_API_KEY` env var -> error.
pub struct AnthropicProvider {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider from the given configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.anthropic.api_key` if set and non-empty
    /// 2. `ANTHROPIC_API_KEY` environment variable
    /// 3. Returns a `Config` error if neither is available
    pub fn new(config: &BloomdeskConfig) -> Result<Self, BloomdeskError> {
        let api_key = resolve_api_key(&config.anthropic.api_key)?;
        let client = AnthropicClient::new(api_key, config.anthropic.api_version.clone())?;

        info!(
            model = config.anthropic.model,
            "Anthropic provider initialized"
        );

        Ok(Self {
            client,
            model: config.anthropic.model.clone(),
            max_tokens: config.anthropic.max_tokens,
            temperature: config.anthropic.temperature,
        })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: AnthropicClient, model: String) -> Self {
        Self {
            client,
            model,
            max_tokens: 1024,
            temperature: 0.0,
        }
    }

    /// Converts a [`CompletionRequest`] to an Anthropic [`MessageRequest`].
    fn to_message_request(&self, request: &CompletionRequest) -> MessageRequest {
        MessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: request.message.clone(),
            }],
            system: Some(request.system.clone()),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, BloomdeskError> {
        let api_request = self.to_message_request(&request);
        let response = self.client.complete_message(&api_request).await?;

        // Concatenate the text content from response blocks.
        let text = response
            .content
            .iter()
            .map(|block| match block {
                ResponseContentBlock::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(CompletionResponse {
            text,
            model: response.model,
            stop_reason: response.stop_reason,
            usage: TokenUsage {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
            },
        })
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, BloomdeskError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
        BloomdeskError::Config(
            "Anthropic API key not found. Set anthropic.api_key in config or ANTHROPIC_API_KEY environment variable.".into(),
        )
    })
}
