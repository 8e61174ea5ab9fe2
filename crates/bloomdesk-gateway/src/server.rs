// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the triage endpoint.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use bloomdesk_agent::TriagePipeline;
use bloomdesk_core::BloomdeskError;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared state for axum request handlers.
///
/// `pipeline` is `None` when no API credential was available at startup;
/// the server still runs and answers 503 on /chat so the missing
/// credential surfaces as an explicit client-visible error.
#[derive(Clone)]
pub struct GatewayState {
    /// The triage pipeline, absent without a credential.
    pub pipeline: Option<Arc<TriagePipeline>>,
}

/// Gateway server configuration (mirrors GatewayConfig from bloomdesk-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the axum router with all routes and middleware.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/chat", post(handlers::post_chat))
        .route("/health", get(handlers::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until `cancel` fires,
/// then shuts down gracefully.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    cancel: CancellationToken,
) -> Result<(), BloomdeskError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BloomdeskError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .map_err(|e| BloomdeskError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
