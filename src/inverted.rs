//! Inverted index construction.
//!
//! Maps every token to the ascending list of lines that contain it. Built
//! once from a frozen [`Corpus`]; there is no mutation path afterwards, so a
//! shared `&InvertedIndex` can be read from any number of threads.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTINGS_ASCENDING**: Each posting list is strictly ascending
//! 2. **ONCE_PER_LINE**: A line appears at most once per token, however many
//!    times the token occurs in it
//! 3. **NON_EMPTY**: Every stored token has at least one posting
//! 4. **IN_BOUNDS**: Every posting is `< total_lines`
//! 5. **COMPLETE**: Every token of every line is present
//!
//! Together these make the index a pure function of the corpus: rebuilding
//! from the same lines, sequentially or in parallel, yields equal indexes.

use std::collections::HashMap;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::check_index_well_formed;
use crate::corpus::Corpus;
use crate::tokenize::tokenize;
use crate::types::{IndexStats, LineId};

/// Token → ascending line ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: HashMap<String, Vec<LineId>>,
    total_lines: usize,
}

impl InvertedIndex {
    /// Build the index over every line of `corpus`.
    ///
    /// O(total tokens) time and space.
    pub fn build(corpus: &Corpus) -> Self {
        build_inverted_index(corpus)
    }

    /// Posting list for `token`, or `None` if it never occurs.
    ///
    /// `token` must already be normalized (see [`crate::tokenize()`]).
    pub fn lookup(&self, token: &str) -> Option<&[LineId]> {
        self.terms.get(token).map(Vec::as_slice)
    }

    /// Number of lines the index was built over.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn posting_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    /// Iterate `(token, postings)` in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[LineId])> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            lines: self.total_lines,
            terms: self.term_count(),
            postings: self.posting_count(),
        }
    }
}

/// Build an inverted index from a corpus.
///
/// Lines are processed in ascending order, so appending a line id yields a
/// sorted list without a sort pass. A token repeated within one line is
/// recorded once: the last pushed id is the current line, so it is skipped.
pub fn build_inverted_index(corpus: &Corpus) -> InvertedIndex {
    let start = Instant::now();
    let mut terms: HashMap<String, Vec<LineId>> = HashMap::new();

    for (line, text) in corpus.iter() {
        for token in tokenize(text) {
            let postings = terms.entry(token).or_default();
            // INVARIANT: ONCE_PER_LINE
            if postings.last() != Some(&line) {
                postings.push(line);
            }
        }
    }

    finish(terms, corpus.len(), start)
}

/// Build an inverted index using parallel map-reduce.
///
/// 1. **Map phase**: tokenize every line in parallel into its distinct tokens
/// 2. **Reduce phase**: append line ids in corpus order
///
/// The reduce runs sequentially over lines in ascending order, so the result
/// is identical to [`build_inverted_index`].
#[cfg(feature = "parallel")]
pub fn build_inverted_index_parallel(corpus: &Corpus) -> InvertedIndex {
    let start = Instant::now();

    // MAP PHASE: parallel tokenization
    let per_line: Vec<Vec<String>> = corpus
        .lines()
        .par_iter()
        .map(|text| {
            let mut tokens = tokenize(text);
            tokens.sort_unstable();
            tokens.dedup();
            tokens
        })
        .collect();

    // REDUCE PHASE: ascending line order keeps postings sorted
    let mut terms: HashMap<String, Vec<LineId>> = HashMap::new();
    for (line, tokens) in per_line.into_iter().enumerate() {
        for token in tokens {
            terms.entry(token).or_default().push(line);
        }
    }

    finish(terms, corpus.len(), start)
}

/// Sequential version when the `parallel` feature is off.
#[cfg(not(feature = "parallel"))]
pub fn build_inverted_index_parallel(corpus: &Corpus) -> InvertedIndex {
    build_inverted_index(corpus)
}

fn finish(mut terms: HashMap<String, Vec<LineId>>, total_lines: usize, start: Instant) -> InvertedIndex {
    terms.shrink_to_fit();
    let index = InvertedIndex { terms, total_lines };
    check_index_well_formed(&index);

    tracing::info!(
        lines = index.total_lines,
        terms = index.term_count(),
        postings = index.posting_count(),
        elapsed = ?start.elapsed(),
        "built inverted index"
    );

    index
}
