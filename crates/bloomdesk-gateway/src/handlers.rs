// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the triage REST API.
//!
//! Handles POST /chat and GET /health.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use bloomdesk_core::types::Route;

use crate::server::GatewayState;

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The customer message to triage.
    pub message: String,
}

/// Response body for POST /chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Brand-voiced reply for the selected branch.
    pub response: String,
    /// The selected resolution workflow label.
    pub route: Route,
    /// Route-derived confidence score.
    pub confidence: f64,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// POST /chat
///
/// Accepts a customer support message and returns the branch-selected
/// reply. 400 on empty message, 503 when no API credential was available
/// at startup, 500 on provider failure.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Response {
    if body.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Message cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let Some(pipeline) = state.pipeline.as_ref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Anthropic API key not configured. Set anthropic.api_key or the \
                        ANTHROPIC_API_KEY environment variable to use the triage agent."
                    .to_string(),
            }),
        )
            .into_response();
    };

    match pipeline.handle(&body.message).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ChatResponse {
                response: outcome.response,
                route: outcome.route,
                confidence: outcome.confidence,
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "triage pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "triage pipeline failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
///
/// Returns health status of the gateway.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserializes() {
        let json = r#"{"message": "my order arrived damaged"}"#;
        let req: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.message, "my order arrived damaged");
    }

    #[test]
    fn chat_response_serializes_route_label() {
        let resp = ChatResponse {
            response: "So sorry about that!".to_string(),
            route: Route::Replacement,
            confidence: 0.80,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["response"], "So sorry about that!");
        assert_eq!(json["route"], "REPLACEMENT");
        assert_eq!(json["confidence"], 0.80);
    }

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
    }

    #[test]
    fn error_response_serializes() {
        let resp = ErrorResponse {
            error: "Message cannot be empty".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Message cannot be empty"));
    }
}
