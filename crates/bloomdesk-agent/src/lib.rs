// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution responders and the two-step triage pipeline.
//!
//! Five mutually exclusive branches keyed by the router's verdict: three
//! resolution workflows and the clarification branch delegate to the
//! provider with their own system prompts; the out-of-scope branch is
//! static text with no model call.

pub mod pipeline;
pub mod prompts;
pub mod responder;

pub use pipeline::TriagePipeline;
pub use responder::Responder;
