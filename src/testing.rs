//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::tokenize::tokenize;
use crate::types::{LineId, Strategy};

/// Build a corpus from string slices.
///
/// Panics on an empty slice; tests that need the error call `Corpus::new`.
pub fn corpus(lines: &[&str]) -> Corpus {
    Corpus::new(lines.iter().map(|s| s.to_string()).collect())
        .expect("test corpus must not be empty")
}

/// Reference evaluator: decides each line independently from its tokens.
///
/// Obviously correct and slow. Both real backends are checked against it.
pub fn oracle_evaluate(query_tokens: &[String], strategy: Strategy, corpus: &Corpus) -> Vec<LineId> {
    corpus
        .iter()
        .filter(|(_, text)| {
            let line_tokens = tokenize(text);
            strategy.admits(query_tokens.iter().map(|q| line_tokens.contains(q)))
        })
        .map(|(line, _)| line)
        .collect()
}
