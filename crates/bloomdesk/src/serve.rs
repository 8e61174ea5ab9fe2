// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `bloomdesk serve` command implementation.
//!
//! Builds the Anthropic provider and the triage pipeline, then runs the
//! HTTP gateway until a shutdown signal arrives. A missing API credential
//! is not fatal: the gateway starts anyway and answers 503 on /chat so
//! the problem is visible to clients instead of killing the service.

use std::sync::Arc;

use bloomdesk_agent::TriagePipeline;
use bloomdesk_anthropic::AnthropicProvider;
use bloomdesk_config::BloomdeskConfig;
use bloomdesk_core::BloomdeskError;
use bloomdesk_gateway::{start_server, GatewayState, ServerConfig};
use tracing::{info, warn};

use crate::shutdown;

/// Runs the `bloomdesk serve` command.
pub async fn run_serve(config: BloomdeskConfig) -> Result<(), BloomdeskError> {
    init_tracing(&config.agent.log_level);

    info!(name = config.agent.name.as_str(), "starting bloomdesk serve");

    let pipeline = match AnthropicProvider::new(&config) {
        Ok(provider) => {
            let provider: Arc<dyn bloomdesk_core::CompletionProvider> = Arc::new(provider);
            Some(Arc::new(TriagePipeline::new(provider)))
        }
        Err(e @ BloomdeskError::Config(_)) => {
            warn!(
                error = %e,
                "no Anthropic API credential; serving degraded (/chat answers 503)"
            );
            None
        }
        Err(e) => return Err(e),
    };

    let state = GatewayState { pipeline };
    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    // Install signal handler.
    let cancel = shutdown::install_signal_handler();

    start_server(&server_config, state, cancel).await?;

    info!("bloomdesk serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bloomdesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
