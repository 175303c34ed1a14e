// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search session: one frozen corpus, one index built from it.
//!
//! The session is the only owner of the index and hands out nothing but
//! shared references, so once [`build_index`] returns the index can no
//! longer change. `SearchSession` is `Send + Sync`; callers that want to
//! serve queries from several threads can wrap it in an `Arc`.
//!
//! The shell talks to the session through [`Command`]s. Dispatch is pure: the
//! same command against the same session always produces the same
//! [`Outcome`], and nothing about earlier commands is remembered.

use std::time::Instant;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::format::{format_listing, format_results};
use crate::inverted::{build_inverted_index_parallel, InvertedIndex};
use crate::search::{evaluate, Query};
use crate::types::{Backend, Hit, IndexStats, SearchResult, Strategy};

/// Corpora at least this large are indexed with the parallel builder.
pub const PARALLEL_BUILD_THRESHOLD: usize = 10_000;

/// Freeze `lines` into a corpus and index it.
///
/// Fails with [`SearchError::EmptyCorpus`](crate::SearchError::EmptyCorpus)
/// when `lines` is empty.
pub fn build_index(lines: Vec<String>) -> Result<SearchSession> {
    Ok(SearchSession::new(Corpus::new(lines)?))
}

/// Immutable corpus plus its inverted index.
#[derive(Debug, Clone)]
pub struct SearchSession {
    corpus: Corpus,
    index: InvertedIndex,
}

impl SearchSession {
    pub fn new(corpus: Corpus) -> Self {
        let index = if corpus.len() >= PARALLEL_BUILD_THRESHOLD {
            build_inverted_index_parallel(&corpus)
        } else {
            InvertedIndex::build(&corpus)
        };
        Self { corpus, index }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Evaluate a raw query and map the matched ids back to their lines.
    pub fn search(&self, raw_query: &str, strategy: Strategy, backend: Backend) -> Result<SearchResult> {
        let start = Instant::now();
        let query = Query::parse(raw_query)?;
        let index = match backend {
            Backend::Index => Some(&self.index),
            Backend::Scan => None,
        };
        let lines = evaluate(&query, strategy, &self.corpus, index);

        tracing::debug!(
            tokens = ?query.tokens(),
            %strategy,
            %backend,
            hits = lines.len(),
            elapsed = ?start.elapsed(),
            "evaluated query"
        );

        let hits: Vec<Hit> = lines
            .into_iter()
            .map(|line| Hit {
                line,
                text: self.corpus[line].to_string(),
            })
            .collect();

        Ok(SearchResult {
            strategy,
            backend,
            tokens: query.tokens().to_vec(),
            count: hits.len(),
            hits,
        })
    }

    /// Evaluate a raw query and return the display string.
    ///
    /// `use_index` picks the indexed backend; `false` scans the lines. Both
    /// return the same text for the same query.
    pub fn run_query(&self, raw_query: &str, strategy: Strategy, use_index: bool) -> Result<String> {
        let result = self.search(raw_query, strategy, Backend::from(use_index))?;
        Ok(format_results(&result.texts()))
    }

    /// Every line of the corpus, in order, under a listing header.
    pub fn list_all(&self) -> String {
        format_listing(LISTING_TITLE, self.corpus.lines())
    }

    /// Map a validated command to its outcome.
    pub fn dispatch(&self, command: &Command) -> Result<Outcome> {
        match command {
            Command::Find {
                strategy,
                backend,
                query,
            } => {
                let result = self.search(query, *strategy, *backend)?;
                Ok(Outcome::Results(result))
            }
            Command::ListAll => Ok(Outcome::Listing(self.list_all())),
            Command::Exit => Ok(Outcome::Exit),
        }
    }
}

/// Title of the full-corpus listing.
pub const LISTING_TITLE: &str = "List of people";

/// A request from the shell, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a query.
    Find {
        strategy: Strategy,
        backend: Backend,
        query: String,
    },
    /// Print every line.
    ListAll,
    /// End the session.
    Exit,
}

/// What a [`Command`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Results(SearchResult),
    Listing(String),
    Exit,
}
