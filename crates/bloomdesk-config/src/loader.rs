// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./bloomdesk.toml` > `~/.config/bloomdesk/bloomdesk.toml`
//! > `/etc/bloomdesk/bloomdesk.toml` with environment variable overrides via
//! `BLOOMDESK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::BloomdeskConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/bloomdesk/bloomdesk.toml` (system-wide)
/// 3. `~/.config/bloomdesk/bloomdesk.toml` (user XDG config)
/// 4. `./bloomdesk.toml` (local directory)
/// 5. `BLOOMDESK_*` environment variables
pub fn load_config() -> Result<BloomdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BloomdeskConfig::default()))
        .merge(Toml::file("/etc/bloomdesk/bloomdesk.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("bloomdesk/bloomdesk.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("bloomdesk.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<BloomdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BloomdeskConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BloomdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BloomdeskConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `BLOOMDESK_ANTHROPIC_API_KEY` must map
/// to `anthropic.api_key`, not `anthropic.api.key`.
fn env_provider() -> Env {
    Env::prefixed("BLOOMDESK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: BLOOMDESK_ANTHROPIC_API_KEY -> "anthropic_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}
