// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Bloomdesk integration tests.

pub mod mock_provider;

pub use mock_provider::MockProvider;
