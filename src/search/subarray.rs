// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Maximum contiguous subarray (Kadane's algorithm).
//!
//! The running sum is the best sum of a range ending at the current element.
//! At each step it either extends the previous range or restarts at the
//! current element, whichever is larger:
//!
//! ```text
//! running = max(x, running + x)
//! best    = max(best, running)
//! ```
//!
//! Sums are accumulated in `i128`. With `i64` elements that cannot overflow
//! for any slice that fits in memory.
//!
//! **Invariant**: the reported range is non-empty and its elements sum to the
//! reported value, which is the maximum over all non-empty ranges.
//!
//! **Verified by**:
//! - `prop_kadane_matches_brute_force` (tests/property/search_props.rs)
//! - `fuzz_targets/max_subarray.rs`

use crate::contracts::check_subarray_witness;
use crate::types::Subarray;

/// Maximum subarray together with its range.
///
/// Returns `None` for empty input. When several ranges share the maximum sum,
/// the one that ends first wins.
///
/// ```
/// use kata::{max_subarray, Subarray};
///
/// assert_eq!(
///     max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]),
///     Some(Subarray { start: 3, end: 7, sum: 6 })
/// );
/// assert_eq!(max_subarray(&[]), None);
/// ```
pub fn max_subarray(values: &[i64]) -> Option<Subarray> {
    let (&first, rest) = values.split_first()?;

    let mut running = i128::from(first);
    let mut running_start = 0;
    let mut best = Subarray {
        start: 0,
        end: 1,
        sum: running,
    };

    for (offset, &value) in rest.iter().enumerate() {
        let i = offset + 1;
        let value = i128::from(value);

        if running + value < value {
            running = value;
            running_start = i;
        } else {
            running += value;
        }

        if running > best.sum {
            best = Subarray {
                start: running_start,
                end: i + 1,
                sum: running,
            };
        }
    }

    check_subarray_witness(values, &best);
    Some(best)
}

/// Maximum sum over all non-empty contiguous ranges; `0` for empty input.
///
/// All-negative input returns its largest element, never `0`.
pub fn find_max_subarray_sum(values: &[i64]) -> i128 {
    max_subarray(values).map_or(0, |sub| sub.sum)
}
