// SPDX-FileCopyrightText: 2026 Bloomdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verdict extraction from raw router model output.
//!
//! The router asks the model for a bare JSON object, but models wrap
//! output in markdown fences, add prose, or drift from the label set.
//! Everything here degrades to [`Route::NeedsClarification`] instead of
//! failing the request: malformed model output must never surface as an
//! error to the customer.

use std::str::FromStr;
use std::sync::LazyLock;

use bloomdesk_core::types::{Route, RouterVerdict};
use regex::Regex;

/// Matches the first brace-delimited JSON object in the raw reply.
/// The character class crosses newlines, so fenced multi-line objects match.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("hardwired pattern compiles"));

/// Extracts a [`RouterVerdict`] from raw model output.
///
/// Finds the first brace-delimited JSON substring, parses it, and reads
/// the `classification` and `clarifying_question` fields. Any missing
/// JSON, parse failure, or unrecognized label yields
/// `NeedsClarification` with no clarifying question.
pub fn parse_verdict(raw: &str) -> RouterVerdict {
    let fallback = RouterVerdict {
        route: Route::NeedsClarification,
        clarifying_question: None,
    };

    let Some(found) = JSON_OBJECT.find(raw) else {
        return fallback;
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(found.as_str()) else {
        return fallback;
    };

    let route = value
        .get("classification")
        .and_then(|v| v.as_str())
        .map(normalize_label)
        .unwrap_or(Route::NeedsClarification);

    // Null, missing, empty, and non-string values all mean "no question".
    let clarifying_question = value
        .get("clarifying_question")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    RouterVerdict {
        route,
        clarifying_question,
    }
}

/// Normalizes a raw classification label to a [`Route`].
///
/// Trims, uppercases, and converts spaces to underscores, so "store
/// credit" and "Refund" both land on their canonical labels. Anything
/// outside the five-label set coerces to `NeedsClarification`.
pub fn normalize_label(label: &str) -> Route {
    let canonical = label.trim().to_uppercase().replace(' ', "_");
    Route::from_str(&canonical).unwrap_or(Route::NeedsClarification)
}

/// Deterministic confidence score for a route.
///
/// A pure function of the route, independent of message content:
/// clarification requests score lowest, out-of-scope redirects sit in
/// the middle, and the three resolution workflows score highest.
pub fn confidence_for(route: Route) -> f64 {
    match route {
        Route::NeedsClarification => 0.55,
        Route::OutOfScope => 0.70,
        Route::Refund | Route::Replacement | Route::StoreCredit => 0.80,
    }
}
