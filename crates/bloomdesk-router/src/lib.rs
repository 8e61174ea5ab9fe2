// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution-workflow classification for the Bloomdesk triage service.
//!
//! One model call classifies a customer message into a [`Route`]; the
//! parsing layer coerces anything malformed into a clarification request
//! so the request never fails on bad model output.
//!
//! [`Route`]: bloomdesk_core::types::Route

pub mod router;
pub mod verdict;

pub use router::{Router, ROUTER_SYSTEM};
pub use verdict::{confidence_for, normalize_label, parse_verdict};
