//! Shared test utilities and fixtures.

#![allow(dead_code)]

use linedex::{build_index, SearchSession};
use proptest::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

/// Corpus from the case-insensitivity example.
pub const FOX_LINES: &[&str] = &["The Brown FoX", "fox jumps", "no match here"];

/// Corpus from the strategy examples.
pub const ABC_LINES: &[&str] = &["a b", "b c", "c d"];

/// People-and-emails corpus in the shape the interactive shell expects.
pub const PEOPLE_LINES: &[&str] = &[
    "Dwight Joseph djo@gmail.com",
    "Rene Webb webb@gmail.com",
    "Katie Jacobs",
    "Erick Harrington harrington@gmail.com",
    "Myrtle Medina",
    "Erick Burgess",
];

/// Build a session from string slices.
pub fn session(lines: &[&str]) -> SearchSession {
    build_index(lines.iter().map(|s| s.to_string()).collect()).expect("non-empty fixture")
}

/// Run a query through both backends, assert they render identically, and
/// return the rendering.
pub fn run_both(session: &SearchSession, query: &str, strategy: linedex::Strategy) -> String {
    let indexed = session.run_query(query, strategy, true).expect("valid query");
    let scanned = session.run_query(query, strategy, false).expect("valid query");
    assert_eq!(
        indexed, scanned,
        "backends render differently for {:?} {}",
        query, strategy
    );
    indexed
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small vocabulary so random queries actually hit random lines.
pub const VOCAB: &[&str] = &["ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen"];

/// A word from `VOCAB` in random letter case.
pub fn word_strategy() -> impl Strategy<Value = String> {
    (prop::sample::select(VOCAB), any::<bool>())
        .prop_map(|(w, upper)| if upper { w.to_uppercase() } else { w.to_string() })
}

/// One of the separators, or a run of them.
pub fn separator_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t.,!?]{1,3}").unwrap()
}

/// A line: words joined by separator runs, possibly padded, possibly empty.
pub fn line_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec((word_strategy(), separator_strategy()), 0..6),
        prop::option::of(separator_strategy()),
    )
        .prop_map(|(parts, lead)| {
            let mut line = lead.unwrap_or_default();
            for (word, sep) in parts {
                line.push_str(&word);
                line.push_str(&sep);
            }
            line
        })
}

/// A non-empty corpus.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 1..12)
}

/// A query of one to three vocabulary words (always at least one token).
pub fn query_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..4)
}

/// Any of the three strategies.
pub fn strategy_strategy() -> impl Strategy<Value = linedex::Strategy> {
    prop::sample::select(linedex::Strategy::ALL_VARIANTS.to_vec())
}
