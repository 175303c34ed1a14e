//! Differential testing: compare both backends against a naive oracle.
//!
//! The oracle decides each line on its own by tokenizing it and asking the
//! strategy whether the per-token containment flags are admitted. If a
//! backend disagrees with it, the oracle is right.

use super::common::{corpus_strategy, query_strategy, strategy_strategy};
use linedex::testing::oracle_evaluate;
use linedex::{evaluate, evaluate_with, Corpus, InvertedIndex, IndexSource, Query, ScanSource};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: indexed evaluation matches the oracle.
    #[test]
    fn diff_indexed_vs_oracle(
        lines in corpus_strategy(),
        words in query_strategy(),
        strategy in strategy_strategy(),
    ) {
        let corpus = Corpus::new(lines).unwrap();
        let index = InvertedIndex::build(&corpus);
        let query = Query::parse(&words.join(" ")).unwrap();

        let fast = evaluate(&query, strategy, &corpus, Some(&index));
        let oracle = oracle_evaluate(query.tokens(), strategy, &corpus);

        prop_assert_eq!(fast, oracle, "indexed {} differs for {:?}", strategy, query.tokens());
    }

    /// Differential test: scan evaluation matches the oracle.
    #[test]
    fn diff_scan_vs_oracle(
        lines in corpus_strategy(),
        words in query_strategy(),
        strategy in strategy_strategy(),
    ) {
        let corpus = Corpus::new(lines).unwrap();
        let query = Query::parse(&words.join(" ")).unwrap();

        let scanned = evaluate_with(&query, strategy, &ScanSource::new(&corpus));
        let oracle = oracle_evaluate(query.tokens(), strategy, &corpus);

        prop_assert_eq!(scanned, oracle, "scan {} differs for {:?}", strategy, query.tokens());
    }

    /// Differential test: the explicit index source matches `evaluate`.
    #[test]
    fn diff_index_source_vs_evaluate(
        lines in corpus_strategy(),
        words in query_strategy(),
        strategy in strategy_strategy(),
    ) {
        let corpus = Corpus::new(lines).unwrap();
        let index = InvertedIndex::build(&corpus);
        let query = Query::parse(&words.join(" ")).unwrap();

        prop_assert_eq!(
            evaluate_with(&query, strategy, &IndexSource::new(&index)),
            evaluate(&query, strategy, &corpus, Some(&index))
        );
    }
}
