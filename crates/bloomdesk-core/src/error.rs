// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Bloomdesk triage service.

use thiserror::Error;

/// The primary error type used across all Bloomdesk crates.
#[derive(Debug, Error)]
pub enum BloomdeskError {
    /// Configuration errors (invalid TOML, missing API credential).
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider errors (API failure, unparseable response body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Gateway errors (bind failure, server error).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
