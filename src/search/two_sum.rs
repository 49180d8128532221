// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-index sum lookup.
//!
//! One forward scan with a map from each value to the first index it was seen
//! at. The current element is inserted only after its complement lookup, so an
//! element is never paired with itself, and a repeated value that doubles to
//! the target pairs its two distinct occurrences.

use std::collections::HashMap;

use crate::contracts::check_two_sum_pair;
use crate::types::IndexPair;

/// Find `(i, j)` with `i < j` and `values[i] + values[j] == target`.
///
/// The first `j` (in scan order) that completes a pair wins, paired with the
/// earliest `i` holding the complement. Returns `None` when no pair exists.
///
/// ```
/// use kata::{two_sum, IndexPair};
///
/// assert_eq!(two_sum(&[3, 2, 4], 6), Some(IndexPair(1, 2)));
/// assert_eq!(two_sum(&[1, 2, 3], 10), None);
/// ```
pub fn two_sum(values: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        // An unrepresentable complement can't have been seen.
        if let Some(&earlier) = target
            .checked_sub(value)
            .and_then(|complement| seen.get(&complement))
        {
            let pair = IndexPair(earlier, i);
            check_two_sum_pair(values, target, pair);
            return Some(pair);
        }
        seen.entry(value).or_insert(i);
    }

    None
}
