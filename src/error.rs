//! Error types for index construction, querying and corpus loading.
//!
//! The core never terminates the process. Every failure comes back as a
//! [`SearchError`] and the caller decides what the user sees.

use std::io;

use thiserror::Error;

/// A specialized Result type for linedex operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Everything that can go wrong between reading a corpus and printing results.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query normalized to zero tokens.
    #[error("query {query:?} contains no searchable words")]
    InvalidQuery { query: String },

    /// An index was requested over a corpus with no lines.
    #[error("corpus is empty: at least one line is required")]
    EmptyCorpus,

    /// A strategy name that is not one of ALL, ANY or NONE.
    #[error("unsupported strategy {name:?} (expected ALL, ANY or NONE)")]
    UnsupportedStrategy { name: String },

    /// A backend name that is not `index` or `scan`.
    #[error("unsupported backend {name:?} (expected index or scan)")]
    UnsupportedBackend { name: String },

    /// The declared line count on the console was not a non-negative integer.
    #[error("incorrect line count {input:?}")]
    InvalidLineCount { input: String },

    /// The console ended before the declared number of lines arrived.
    #[error("expected {expected} lines of data, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    /// I/O failure while acquiring the corpus.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SearchError {
    pub fn invalid_query(query: impl Into<String>) -> Self {
        Self::InvalidQuery {
            query: query.into(),
        }
    }

    /// True for errors caused by user input rather than the environment.
    ///
    /// The interactive shell reports these and keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery { .. }
                | Self::UnsupportedStrategy { .. }
                | Self::UnsupportedBackend { .. }
        )
    }
}
