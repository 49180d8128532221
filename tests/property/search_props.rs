//! Properties of the maximum-subarray and two-sum searches.

use super::oracles::oracle_max_subarray_sum;
use kata::{find_max_subarray_sum, max_subarray, two_sum, IndexPair};
use proptest::prelude::*;

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Kadane's result equals the brute-force maximum.
    #[test]
    fn prop_kadane_matches_brute_force(values in values_strategy()) {
        prop_assert_eq!(
            find_max_subarray_sum(&values),
            oracle_max_subarray_sum(&values).unwrap_or(0)
        );
    }

    /// Property: the witness is a non-empty in-bounds range that sums to the result.
    #[test]
    fn prop_witness_sums_to_result(values in values_strategy()) {
        match max_subarray(&values) {
            None => prop_assert!(values.is_empty()),
            Some(sub) => {
                prop_assert!(sub.start < sub.end);
                prop_assert!(sub.end <= values.len());
                let sum: i128 = values[sub.start..sub.end].iter().map(|&v| i128::from(v)).sum();
                prop_assert_eq!(sum, sub.sum);
                prop_assert_eq!(sub.sum, find_max_subarray_sum(&values));
            }
        }
    }

    /// Property: all-negative input yields its largest element.
    #[test]
    fn prop_all_negative_is_max_element(values in prop::collection::vec(-1000i64..0, 1..40)) {
        let largest = values.iter().copied().max().map(i128::from);
        prop_assert_eq!(Some(find_max_subarray_sum(&values)), largest);
    }

    /// Property: a returned pair is ordered, distinct and adds up to the target.
    #[test]
    fn prop_two_sum_pair_is_valid(values in values_strategy(), target in -2000i64..2000) {
        if let Some(IndexPair(i, j)) = two_sum(&values, target) {
            prop_assert!(i < j);
            prop_assert!(j < values.len());
            prop_assert_eq!(values[i] + values[j], target);
        }
    }

    /// Property: no pair is returned only when no pair exists.
    #[test]
    fn prop_two_sum_none_means_no_pair(values in values_strategy(), target in -2000i64..2000) {
        if two_sum(&values, target).is_none() {
            for j in 0..values.len() {
                for i in 0..j {
                    prop_assert_ne!(values[i] + values[j], target);
                }
            }
        }
    }

    /// Property: a planted pair is always found.
    #[test]
    fn prop_two_sum_finds_planted_pair(
        values in prop::collection::vec(-1000i64..1000, 2..60),
        a in 0usize..60,
        b in 0usize..60
    ) {
        let i = a % values.len();
        let j = b % values.len();
        prop_assume!(i != j);
        let target = values[i] + values[j];
        prop_assert!(two_sum(&values, target).is_some());
    }
}
