// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Bloomdesk triage service.
//!
//! Provides the shared error type, the domain types (routes, verdicts,
//! triage outcomes), and the [`CompletionProvider`] trait that the
//! Anthropic adapter and the test mock both implement.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::BloomdeskError;
pub use traits::CompletionProvider;
pub use types::{
    CompletionRequest, CompletionResponse, Route, RouterVerdict, TokenUsage, TriageOutcome,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloomdesk_error_has_all_variants() {
        // Verify all 4 error variants exist and can be constructed.
        let _config = BloomdeskError::Config("test".into());
        let _provider = BloomdeskError::Provider {
            message: "test".into(),
            source: None,
        };
        let _gateway = BloomdeskError::Gateway {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _internal = BloomdeskError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_message() {
        let err = BloomdeskError::Provider {
            message: "API returned 500".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "provider error: API returned 500");
    }

    #[test]
    fn completion_provider_is_object_safe() {
        fn _assert_dyn(_p: &dyn CompletionProvider) {}
    }
}
