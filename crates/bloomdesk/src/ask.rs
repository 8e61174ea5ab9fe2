// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `bloomdesk ask` command implementation.
//!
//! One-shot triage from the command line: classify a single message, run
//! the branch responder, and print the outcome as JSON. Requires an API
//! credential (unlike `serve`, there is no degraded mode to fall back to).

use std::sync::Arc;

use bloomdesk_agent::TriagePipeline;
use bloomdesk_anthropic::AnthropicProvider;
use bloomdesk_config::BloomdeskConfig;
use bloomdesk_core::BloomdeskError;

/// Runs the `bloomdesk ask` command.
pub async fn run_ask(config: BloomdeskConfig, message: &str) -> Result<(), BloomdeskError> {
    if message.trim().is_empty() {
        return Err(BloomdeskError::Config("message must not be empty".into()));
    }

    let provider = AnthropicProvider::new(&config)?;
    let pipeline = TriagePipeline::new(Arc::new(provider));

    let outcome = pipeline.handle(message).await?;

    let json = serde_json::to_string_pretty(&outcome)
        .map_err(|e| BloomdeskError::Internal(format!("failed to serialize outcome: {e}")))?;
    println!("{json}");

    Ok(())
}
