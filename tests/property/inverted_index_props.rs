//! Inverted index property tests.
//!
//! These tests verify inverted index invariants:
//! - Posting lists are strictly ascending (sorted, once per line)
//! - All postings point inside the corpus
//! - Every token of every line is indexed, and nothing else is
//! - Rebuilding, sequentially or in parallel, yields the same index

use super::common::corpus_strategy;
use linedex::{
    build_inverted_index, build_inverted_index_parallel, tokenize, Corpus, InvertedIndex,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: posting lists are strictly ascending and in bounds.
    #[test]
    fn prop_postings_sorted_and_in_bounds(lines in corpus_strategy()) {
        let corpus = Corpus::new(lines).unwrap();
        let index = InvertedIndex::build(&corpus);

        for (term, postings) in index.terms() {
            prop_assert!(!postings.is_empty(), "empty posting list for '{}'", term);
            for w in postings.windows(2) {
                prop_assert!(
                    w[0] < w[1],
                    "postings for '{}' not strictly ascending: {} then {}",
                    term, w[0], w[1]
                );
            }
            for &line in postings {
                prop_assert!(line < corpus.len(), "posting {} out of bounds", line);
            }
        }
    }

    /// Property: a line is listed under a term exactly when it contains it.
    #[test]
    fn prop_index_complete_and_exact(lines in corpus_strategy()) {
        let corpus = Corpus::new(lines).unwrap();
        let index = InvertedIndex::build(&corpus);

        for (line, text) in corpus.iter() {
            for token in tokenize(text) {
                let postings = index.lookup(&token);
                prop_assert!(
                    postings.is_some_and(|p| p.binary_search(&line).is_ok()),
                    "token '{}' of line {} missing from index",
                    token, line
                );
            }
        }

        for (term, postings) in index.terms() {
            for &line in postings {
                prop_assert!(
                    tokenize(&corpus[line]).iter().any(|t| t == term),
                    "line {} listed under '{}' but does not contain it",
                    line, term
                );
            }
        }
    }

    /// Property: rebuilding from the same corpus yields an equal index.
    #[test]
    fn prop_rebuild_idempotent(lines in corpus_strategy()) {
        let corpus = Corpus::new(lines).unwrap();
        let first = build_inverted_index(&corpus);
        let second = build_inverted_index(&corpus);
        prop_assert_eq!(first.stats(), second.stats());
        prop_assert_eq!(first, second);
    }

    /// Property: the parallel builder matches the sequential one.
    #[test]
    fn prop_parallel_matches_sequential(lines in corpus_strategy()) {
        let corpus = Corpus::new(lines).unwrap();
        prop_assert_eq!(
            build_inverted_index_parallel(&corpus),
            build_inverted_index(&corpus)
        );
    }

    /// Property: stats add up.
    #[test]
    fn prop_stats_consistent(lines in corpus_strategy()) {
        let corpus = Corpus::new(lines).unwrap();
        let index = InvertedIndex::build(&corpus);
        let stats = index.stats();

        prop_assert_eq!(stats.lines, corpus.len());
        prop_assert_eq!(stats.terms, index.terms().count());
        prop_assert_eq!(
            stats.postings,
            index.terms().map(|(_, p)| p.len()).sum::<usize>()
        );
    }
}
