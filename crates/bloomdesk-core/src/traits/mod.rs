// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams implemented by provider adapters.

pub mod provider;

pub use provider::CompletionProvider;
