//! Runtime contracts for every public operation.
//!
//! Debug-mode assertions that check each function's postcondition right
//! before it returns. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development and fuzzing
//! 3. Restate the documented contract, not the implementation
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Postcondition                                      |
//! |----------------------------|----------------------------------------------------|
//! | `check_labels_len`         | one label per number in `1..=n`                    |
//! | `check_reversal`           | same char count, same multiset of chars            |
//! | `check_fibonacci_prefix`   | starts `0, 1` and follows `F(i) = F(i-1) + F(i-2)` |
//! | `check_subarray_witness`   | non-empty in-bounds range that sums to the result  |
//! | `check_two_sum_pair`       | `i < j`, in bounds, values add up to target        |
//!
//! # Usage
//!
//! ```ignore
//! use kata::contracts::*;
//!
//! // In debug builds, this panics if the pair is wrong
//! check_two_sum_pair(&values, target, pair);
//!
//! // In release builds, this is a no-op
//! ```

use num_bigint::BigUint;

use crate::types::{IndexPair, Subarray};

// ============================================================================
// LABELED SEQUENCE CONTRACTS
// ============================================================================

/// Check that a labeled sequence has exactly one entry per number.
///
/// # Panics (debug builds only)
/// Panics if `labels.len() != n`.
#[inline]
pub fn check_labels_len(labels: &[String], n: u64) {
    debug_assert_eq!(
        labels.len() as u64,
        n,
        "Contract violation: labeled sequence has {} entries for n = {}",
        labels.len(),
        n
    );
}

// ============================================================================
// STRING CONTRACTS
// ============================================================================

/// Check that `reversed` is a character-level reversal of `original`.
///
/// # Panics (debug builds only)
/// Panics if the char counts differ or the chars don't mirror each other.
#[inline]
pub fn check_reversal(original: &str, reversed: &str) {
    if cfg!(debug_assertions) {
        let forward = original.chars();
        let backward = reversed.chars().rev();
        debug_assert!(
            forward.eq(backward),
            "Contract violation: '{}' is not the reversal of '{}'",
            reversed.chars().take(20).collect::<String>(),
            original.chars().take(20).collect::<String>()
        );
    }
}

// ============================================================================
// FIBONACCI CONTRACTS
// ============================================================================

/// Check that `terms` is a prefix of the Fibonacci sequence.
///
/// # Panics (debug builds only)
/// Panics if the seeds are wrong or any term breaks the recurrence.
#[inline]
pub fn check_fibonacci_prefix(terms: &[BigUint]) {
    if let Some(first) = terms.first() {
        debug_assert_eq!(
            *first,
            BigUint::from(0u32),
            "Contract violation: F(0) = {} (expected 0)",
            first
        );
    }
    if let Some(second) = terms.get(1) {
        debug_assert_eq!(
            *second,
            BigUint::from(1u32),
            "Contract violation: F(1) = {} (expected 1)",
            second
        );
    }

    for i in 2..terms.len() {
        debug_assert_eq!(
            terms[i],
            &terms[i - 1] + &terms[i - 2],
            "Contract violation: F({}) breaks the recurrence",
            i
        );
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that a maximum-subarray witness is a real range of `values`.
///
/// Only the witness is checked here; maximality is covered by the brute-force
/// differential tests because it costs O(n²).
///
/// # Panics (debug builds only)
/// Panics if the range is empty, out of bounds, or sums to something else.
#[inline]
pub fn check_subarray_witness(values: &[i64], sub: &Subarray) {
    debug_assert!(
        sub.start < sub.end && sub.end <= values.len(),
        "Contract violation: subarray [{}, {}) invalid for len {}",
        sub.start,
        sub.end,
        values.len()
    );

    if sub.start < sub.end && sub.end <= values.len() {
        let actual: i128 = values[sub.start..sub.end]
            .iter()
            .map(|&v| i128::from(v))
            .sum();
        debug_assert_eq!(
            actual, sub.sum,
            "Contract violation: subarray [{}, {}) sums to {} (reported {})",
            sub.start, sub.end, actual, sub.sum
        );
    }
}

/// Check that a two-sum pair is ordered, in bounds, and hits the target.
///
/// # Panics (debug builds only)
/// Panics if `i >= j`, `j` is out of bounds, or the values miss the target.
#[inline]
pub fn check_two_sum_pair(values: &[i64], target: i64, pair: IndexPair) {
    let IndexPair(i, j) = pair;
    debug_assert!(
        i < j && j < values.len(),
        "Contract violation: pair {} invalid for len {}",
        pair,
        values.len()
    );

    if i < j && j < values.len() {
        let sum = i128::from(values[i]) + i128::from(values[j]);
        debug_assert_eq!(
            sum,
            i128::from(target),
            "Contract violation: values[{}] + values[{}] = {} (target {})",
            i,
            j,
            sum,
            target
        );
    }
}
