// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Bloomdesk triage service.
//!
//! One endpoint does the work: POST /chat runs the classify-then-respond
//! pipeline and returns `{response, route, confidence}`. GET /health
//! reports liveness. Requests are fully independent; the only shared
//! state is the immutable pipeline handle.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, GatewayState, ServerConfig};
