//! Shared test utilities and fixtures.

#![allow(dead_code)]

use num_bigint::BigUint;

// Re-export canonical test utilities from kata::testing
pub use kata::testing::{even_three_five, make_rules, to_u64_terms, CLASSIC_SUBARRAY};

// ============================================================================
// FIXTURES
// ============================================================================

/// FizzBuzz 1..=15, the canonical expected output.
pub const FIZZBUZZ_15: [&str; 15] = [
    "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13", "14",
    "FizzBuzz",
];

/// First ten Fibonacci numbers.
pub const FIBONACCI_10: [u64; 10] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert a label sequence matches the classic FizzBuzz definition position
/// by position.
pub fn assert_classic_labels(labels: &[String]) {
    for (idx, label) in labels.iter().enumerate() {
        let i = idx as u64 + 1;
        let expected = if i % 15 == 0 {
            "FizzBuzz".to_string()
        } else if i % 3 == 0 {
            "Fizz".to_string()
        } else if i % 5 == 0 {
            "Buzz".to_string()
        } else {
            i.to_string()
        };
        assert_eq!(*label, expected, "label for {} is wrong", i);
    }
}

/// Assert `terms` follows the Fibonacci recurrence from `0, 1`.
pub fn assert_fibonacci_prefix(terms: &[BigUint]) {
    for (i, term) in terms.iter().enumerate() {
        let expected = match i {
            0 => BigUint::from(0u32),
            1 => BigUint::from(1u32),
            _ => &terms[i - 1] + &terms[i - 2],
        };
        assert_eq!(*term, expected, "F({}) is wrong", i);
    }
}
