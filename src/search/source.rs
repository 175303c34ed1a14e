// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Membership sources: where "which lines contain this token?" is answered.
//!
//! The evaluator only ever asks that one question, so the scan and indexed
//! backends cannot drift apart in what ALL, ANY and NONE mean. They differ
//! only in how the answer is computed.

use std::borrow::Cow;

use crate::corpus::Corpus;
use crate::inverted::InvertedIndex;
use crate::tokenize::tokenize;
use crate::types::LineId;

/// Answers per-token membership over a fixed set of lines.
pub trait MembershipSource {
    /// Number of lines; NONE complements against `0..line_count()`.
    fn line_count(&self) -> usize;

    /// Strictly ascending lines containing `token`. Empty if none do.
    fn postings(&self, token: &str) -> Cow<'_, [LineId]>;
}

/// Direct scan: tokenizes every line on each request.
#[derive(Debug, Clone, Copy)]
pub struct ScanSource<'a> {
    corpus: &'a Corpus,
}

impl<'a> ScanSource<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }
}

impl MembershipSource for ScanSource<'_> {
    fn line_count(&self) -> usize {
        self.corpus.len()
    }

    fn postings(&self, token: &str) -> Cow<'_, [LineId]> {
        let lines: Vec<LineId> = self
            .corpus
            .iter()
            .filter(|(_, text)| tokenize(text).iter().any(|t| t == token))
            .map(|(line, _)| line)
            .collect();
        Cow::Owned(lines)
    }
}

/// Index lookup: borrows the stored posting list.
#[derive(Debug, Clone, Copy)]
pub struct IndexSource<'a> {
    index: &'a InvertedIndex,
}

impl<'a> IndexSource<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }
}

impl MembershipSource for IndexSource<'_> {
    fn line_count(&self) -> usize {
        self.index.total_lines()
    }

    fn postings(&self, token: &str) -> Cow<'_, [LineId]> {
        Cow::Borrowed(self.index.lookup(token).unwrap_or(&[]))
    }
}
