//! Differential testing: compare the library against the oracles.
//!
//! Each linear-time algorithm is tested against a quadratic (or otherwise
//! trivially correct) oracle on the same input.

use super::oracles::{
    oracle_ascii_palindrome, oracle_fibonacci, oracle_label, oracle_max_subarray_sum,
    oracle_two_sum,
};
use kata::{
    custom_fizzbuzz, fibonacci, find_max_subarray_sum, is_palindrome, two_sum, RuleSet,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Small values so that sums collide and pairs exist often.
fn small_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..40)
}

/// Up to four rules with divisors 1..12 and short labels.
fn rules_strategy() -> impl Strategy<Value = Vec<(u64, String)>> {
    prop::collection::btree_map(1u64..12, "[A-Z][a-z]{0,4}", 0..4)
        .prop_map(|rules| rules.into_iter().collect())
}

// =============================================================================
// SEARCH: library vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Kadane matches the maximum over every range; empty input is 0.
    #[test]
    fn diff_max_subarray_sum(values in small_values()) {
        let expected = oracle_max_subarray_sum(&values).unwrap_or(0);
        prop_assert_eq!(find_max_subarray_sum(&values), expected);
    }

    /// Kadane also agrees for full-range i64 values (no overflow).
    #[test]
    fn diff_max_subarray_sum_extremes(values in prop::collection::vec(any::<i64>(), 1..20)) {
        prop_assert_eq!(
            Some(find_max_subarray_sum(&values)),
            oracle_max_subarray_sum(&values)
        );
    }

    /// Hash scan finds exactly the pair the quadratic scan finds first.
    #[test]
    fn diff_two_sum(values in small_values(), target in -100i64..100) {
        let found: Option<(usize, usize)> = two_sum(&values, target).map(Into::into);
        prop_assert_eq!(found, oracle_two_sum(&values, target));
    }

    /// Same for arbitrary i64 targets, where complements can overflow.
    #[test]
    fn diff_two_sum_extremes(
        values in prop::collection::vec(any::<i64>(), 0..12),
        target in any::<i64>()
    ) {
        let found: Option<(usize, usize)> = two_sum(&values, target).map(Into::into);
        prop_assert_eq!(found, oracle_two_sum(&values, target));
    }
}

// =============================================================================
// SEQUENCES AND STRINGS: library vs oracle
// =============================================================================

proptest! {
    /// Custom labels match the per-number definition.
    #[test]
    fn diff_custom_fizzbuzz(rules in rules_strategy(), n in 0u64..200) {
        let set = RuleSet::new(rules.iter().map(|(d, l)| (*d, l.clone()))).unwrap();
        let labels = custom_fizzbuzz(n, &set);

        prop_assert_eq!(labels.len() as u64, n);
        for (idx, label) in labels.iter().enumerate() {
            prop_assert_eq!(label, &oracle_label(idx as u64 + 1, &rules));
        }
    }

    /// Every term up to F(186) matches the u128 recurrence.
    #[test]
    fn diff_fibonacci(n in 0usize..187) {
        let terms = fibonacci(n as i64);
        prop_assert_eq!(terms.len(), n);
        for (i, term) in terms.iter().enumerate() {
            prop_assert_eq!(u128::try_from(term).unwrap(), oracle_fibonacci(i));
        }
    }

    /// ASCII palindromes agree with a byte-level two-pointer check.
    #[test]
    fn diff_ascii_palindrome(value in "[abAB \t]{0,12}") {
        prop_assert_eq!(is_palindrome(&value), oracle_ascii_palindrome(&value));
    }
}
