// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering results for display.
//!
//! Pure functions: they take matched lines and return a string. Printing,
//! coloring and choosing between text and JSON belong to the shell.

use crate::types::SearchResult;

/// Shown when a query matches nothing.
pub const NO_RESULTS: &str = "No data found.";

/// Header line stating how many lines matched.
pub fn results_header(count: usize) -> String {
    if count == 1 {
        "1 result.".to_string()
    } else {
        format!("{} results.", count)
    }
}

/// Render matched lines: [`NO_RESULTS`] when empty, otherwise the count
/// header followed by each line verbatim, in the order given.
///
/// ```
/// use linedex::format_results;
///
/// assert_eq!(format_results(&["b c", "c d"]), "2 results.\nb c\nc d");
/// assert_eq!(format_results::<&str>(&[]), "No data found.");
/// ```
pub fn format_results<S: AsRef<str>>(lines: &[S]) -> String {
    if lines.is_empty() {
        return NO_RESULTS.to_string();
    }
    let mut out = results_header(lines.len());
    for line in lines {
        out.push('\n');
        out.push_str(line.as_ref());
    }
    out
}

/// Text rendering of a [`SearchResult`].
pub fn format_result(result: &SearchResult) -> String {
    format_results(&result.texts())
}

/// Pretty-printed JSON rendering of a [`SearchResult`].
pub fn format_result_json(result: &SearchResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Render every line of the corpus under a listing header.
pub fn format_listing<S: AsRef<str>>(title: &str, lines: &[S]) -> String {
    let mut out = format!("=== {} ===", title);
    for line in lines {
        out.push('\n');
        out.push_str(line.as_ref());
    }
    out
}
