// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary shared by the index, the evaluator and the shell.
//!
//! | Type           | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `LineId`       | 0-based position of a line in the corpus       |
//! | `Strategy`     | ALL / ANY / NONE boolean combination           |
//! | `Backend`      | Scan the lines or consult the inverted index   |
//! | `SearchResult` | Matched lines, ascending, with their text      |
//! | `IndexStats`   | Size summary of a built index                  |
//!
//! # Invariants
//!
//! - **SearchResult**: `hits` are strictly ascending by `line`, and every
//!   `line < corpus.len()`. Both backends produce the same hits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Position of a line in the corpus, starting at 0.
pub type LineId = usize;

/// How the tokens of a query combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strategy {
    /// Every query token must be present in the line.
    #[default]
    All,
    /// At least one query token must be present.
    Any,
    /// No query token may be present.
    None,
}

impl Strategy {
    pub const ALL_VARIANTS: [Strategy; 3] = [Strategy::All, Strategy::Any, Strategy::None];

    /// Decide a single line from the per-token presence flags.
    ///
    /// This is the line-at-a-time reading of each strategy; the set-based
    /// evaluator must agree with it on every line.
    pub fn admits(self, mut present: impl Iterator<Item = bool>) -> bool {
        match self {
            Strategy::All => present.all(|p| p),
            Strategy::Any => present.any(|p| p),
            Strategy::None => !present.any(|p| p),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::All => "ALL",
            Strategy::Any => "ANY",
            Strategy::None => "NONE",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(Strategy::All),
            "ANY" => Ok(Strategy::Any),
            "NONE" => Ok(Strategy::None),
            _ => Err(SearchError::UnsupportedStrategy {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// Where membership answers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Set operations over the inverted index posting lists.
    #[default]
    Index,
    /// Inspect every line's own tokens.
    Scan,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Index => "index",
            Backend::Scan => "scan",
        }
    }
}

impl From<bool> for Backend {
    /// `true` selects the index.
    fn from(use_index: bool) -> Self {
        if use_index {
            Backend::Index
        } else {
            Backend::Scan
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "index" | "indexed" | "inverted" => Ok(Backend::Index),
            "scan" | "linear" => Ok(Backend::Scan),
            _ => Err(SearchError::UnsupportedBackend {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// One matched line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub line: LineId,
    pub text: String,
}

/// Outcome of a query, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub strategy: Strategy,
    pub backend: Backend,
    /// Normalized, deduplicated query tokens.
    pub tokens: Vec<String>,
    pub count: usize,
    pub hits: Vec<Hit>,
}

impl SearchResult {
    pub fn line_ids(&self) -> Vec<LineId> {
        self.hits.iter().map(|h| h.line).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.hits.iter().map(|h| h.text.as_str()).collect()
    }
}

/// Size summary of a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Lines in the corpus.
    pub lines: usize,
    /// Distinct tokens.
    pub terms: usize,
    /// Sum of posting list lengths (one per distinct token per line).
    pub postings: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines, {} unique terms, {} postings",
            self.lines, self.terms, self.postings
        )
    }
}
