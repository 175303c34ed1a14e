// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Set operations over strictly ascending line-id lists.
//!
//! All inputs must be strictly ascending; all outputs are too. Merges are
//! linear in the combined input length.

use std::cmp::Ordering;

use crate::types::LineId;

/// Lines present in both lists.
pub fn intersect(a: &[LineId], b: &[LineId]) -> Vec<LineId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Lines present in either list.
pub fn union(a: &[LineId], b: &[LineId]) -> Vec<LineId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Every line in `0..total` that is not in `exclude`.
pub fn complement(exclude: &[LineId], total: usize) -> Vec<LineId> {
    let mut out = Vec::with_capacity(total.saturating_sub(exclude.len()));
    let mut skip = exclude.iter().peekable();
    for line in 0..total {
        if skip.peek() == Some(&&line) {
            skip.next();
        } else {
            out.push(line);
        }
    }
    out
}
