//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use num_bigint::BigUint;

use crate::rules::{RuleError, RuleSet};

/// The classic maximum-subarray sample; its best range is `[3, 7)` with sum 6.
pub const CLASSIC_SUBARRAY: [i64; 9] = [-2, 1, -3, 4, -1, 2, 1, -5, 4];

/// Build a rule set from borrowed pairs.
///
/// This is the canonical implementation used across all tests.
pub fn make_rules(pairs: &[(u64, &str)]) -> Result<RuleSet, RuleError> {
    RuleSet::new(pairs.iter().copied())
}

/// `{2: "Even", 3: "Three", 5: "Five"}`.
pub fn even_three_five() -> RuleSet {
    RuleSet::new([(2, "Even"), (3, "Three"), (5, "Five")]).expect("static rules are valid")
}

/// Narrow Fibonacci terms to `u64` for comparison against literals.
///
/// Panics if a term doesn't fit, which only happens past `F(93)`.
pub fn to_u64_terms(terms: &[BigUint]) -> Vec<u64> {
    terms
        .iter()
        .map(|t| u64::try_from(t).expect("Fibonacci term exceeds u64"))
        .collect()
}
