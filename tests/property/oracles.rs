//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. They are slow on purpose: every
//! one of them is a direct restatement of the definition, with no clever
//! bookkeeping to get wrong. If an oracle and the library disagree, the oracle
//! is right.

#![allow(dead_code)]

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Label for a single number under `(divisor, label)` rules, by definition.
///
/// Rules must be sorted by divisor.
pub fn oracle_label(i: u64, sorted_rules: &[(u64, String)]) -> String {
    let matched: Vec<&str> = sorted_rules
        .iter()
        .filter(|(divisor, _)| i % divisor == 0)
        .map(|(_, label)| label.as_str())
        .collect();

    if matched.is_empty() {
        i.to_string()
    } else {
        matched.concat()
    }
}

/// Maximum over every non-empty range. O(n²).
pub fn oracle_max_subarray_sum(values: &[i64]) -> Option<i128> {
    let mut best: Option<i128> = None;
    for start in 0..values.len() {
        let mut sum = 0i128;
        for &value in &values[start..] {
            sum += i128::from(value);
            best = Some(best.map_or(sum, |b| b.max(sum)));
        }
    }
    best
}

/// Every pair `(i, j)`, ordered by `j` then `i`; the first hit wins. O(n²).
pub fn oracle_two_sum(values: &[i64], target: i64) -> Option<(usize, usize)> {
    for j in 0..values.len() {
        for i in 0..j {
            if i128::from(values[i]) + i128::from(values[j]) == i128::from(target) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Fibonacci term by the closed recurrence, in `u128`. Valid up to `F(186)`.
pub fn oracle_fibonacci(n: usize) -> u128 {
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

/// Palindrome check over bytes of an ASCII string.
pub fn oracle_ascii_palindrome(value: &str) -> bool {
    let cleaned: Vec<u8> = value
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_lowercase())
        .collect();
    let n = cleaned.len();
    (0..n / 2).all(|k| cleaned[k] == cleaned[n - 1 - k])
}
