//! Runtime contracts for the index and the evaluator.
//!
//! Debug-mode assertions that the structures we hand out actually satisfy
//! the invariants the rest of the crate relies on. They:
//!
//! 1. Are **zero-cost in release builds** (the loops sit behind
//!    `cfg!(debug_assertions)`)
//! 2. Provide **early failure detection** during development and in tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                     |
//! |----------------------------|----------------------------------------------|
//! | `check_postings_ascending` | Posting list strictly ascending, in bounds   |
//! | `check_index_well_formed`  | Every list non-empty and ascending           |
//! | `check_result_ascending`   | Evaluator output strictly ascending, bounded |

use crate::inverted::InvertedIndex;
use crate::types::LineId;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that one posting list is strictly ascending and bounded.
///
/// # Panics (debug builds only)
/// Panics on a duplicate, an out-of-order pair, or an id `>= total_lines`.
#[inline]
pub fn check_postings_ascending(term: &str, postings: &[LineId], total_lines: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    for pair in postings.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: postings for '{}' not strictly ascending ({} then {})",
            term,
            pair[0],
            pair[1]
        );
    }
    if let Some(&last) = postings.last() {
        debug_assert!(
            last < total_lines,
            "Contract violation: postings for '{}' reference line {} >= {}",
            term,
            last,
            total_lines
        );
    }
}

/// Check every posting list of a freshly built index.
#[inline]
pub fn check_index_well_formed(index: &InvertedIndex) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (term, postings) in index.terms() {
        debug_assert!(
            !postings.is_empty(),
            "Contract violation: term '{}' has an empty posting list",
            term
        );
        check_postings_ascending(term, postings, index.total_lines());
    }
}

// ============================================================================
// EVALUATOR CONTRACTS
// ============================================================================

/// Check that an evaluation result is in corpus order without repeats.
#[inline]
pub fn check_result_ascending(lines: &[LineId], total_lines: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert!(
        lines.windows(2).all(|w| w[0] < w[1]),
        "Contract violation: result lines not strictly ascending: {:?}",
        lines
    );
    debug_assert!(
        lines.last().map_or(true, |&l| l < total_lines),
        "Contract violation: result references a line beyond {}",
        total_lines
    );
}
