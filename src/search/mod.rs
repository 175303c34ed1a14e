// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: ALL, ANY and NONE over either backend.
//!
//! A query is reduced to its distinct tokens once, up front. From there every
//! strategy is a handful of set operations over per-token posting lists, and
//! the posting lists come from a [`MembershipSource`]: the inverted index, or
//! a scan of the raw lines. Because the strategy code is shared, the two
//! backends agree by construction, and the ordering rule (ascending line id)
//! falls out of merging ascending lists.
//!
//! | Strategy | Set expression                          |
//! |----------|-----------------------------------------|
//! | ALL      | `P(t1) ∩ P(t2) ∩ …`                     |
//! | ANY      | `P(t1) ∪ P(t2) ∪ …`                     |
//! | NONE     | `{0 … n-1} \ (P(t1) ∪ P(t2) ∪ …)`       |

pub mod ops;
mod source;

pub use source::{IndexSource, MembershipSource, ScanSource};

use std::str::FromStr;

use crate::contracts::check_result_ascending;
use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::inverted::InvertedIndex;
use crate::tokenize::tokenize_unique;
use crate::types::{LineId, Strategy};

/// A validated query: at least one normalized token, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    tokens: Vec<String>,
}

impl Query {
    /// Tokenize `raw` and reject it if nothing searchable remains.
    pub fn parse(raw: &str) -> Result<Self> {
        let tokens = tokenize_unique(raw);
        if tokens.is_empty() {
            tracing::warn!(query = raw, "rejected query with no tokens");
            return Err(SearchError::invalid_query(raw));
        }
        Ok(Self {
            raw: raw.to_string(),
            tokens,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Distinct tokens in first-occurrence order. Never empty.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl FromStr for Query {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Evaluate `query` against any membership source.
///
/// Returns matching line ids in ascending order. ALL stops as soon as the
/// running intersection is empty, so a token absent from the corpus costs
/// one lookup and yields no lines rather than an error.
pub fn evaluate_with<S>(query: &Query, strategy: Strategy, source: &S) -> Vec<LineId>
where
    S: MembershipSource + ?Sized,
{
    let lines = match strategy {
        Strategy::All => all_of(query, source),
        Strategy::Any => any_of(query, source),
        Strategy::None => ops::complement(&any_of(query, source), source.line_count()),
    };
    check_result_ascending(&lines, source.line_count());
    lines
}

/// Evaluate `query` over the corpus, through the index when one is given.
///
/// `index` must have been built from `corpus`.
pub fn evaluate(
    query: &Query,
    strategy: Strategy,
    corpus: &Corpus,
    index: Option<&InvertedIndex>,
) -> Vec<LineId> {
    match index {
        Some(index) => {
            debug_assert_eq!(
                index.total_lines(),
                corpus.len(),
                "index was built from a different corpus"
            );
            evaluate_with(query, strategy, &IndexSource::new(index))
        }
        None => evaluate_with(query, strategy, &ScanSource::new(corpus)),
    }
}

fn all_of<S: MembershipSource + ?Sized>(query: &Query, source: &S) -> Vec<LineId> {
    let mut tokens = query.tokens().iter();
    let Some(first) = tokens.next() else {
        return Vec::new();
    };
    let mut acc = source.postings(first).into_owned();
    for token in tokens {
        if acc.is_empty() {
            break;
        }
        acc = ops::intersect(&acc, &source.postings(token));
    }
    acc
}

fn any_of<S: MembershipSource + ?Sized>(query: &Query, source: &S) -> Vec<LineId> {
    query
        .tokens()
        .iter()
        .fold(Vec::new(), |acc, token| ops::union(&acc, &source.postings(token)))
}
