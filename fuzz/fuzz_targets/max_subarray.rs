// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Kadane's maximum subarray.
//!
//! Arbitrary `i64` slices, including extremes that would overflow a naive
//! `i64` accumulator. The witness must be a real range and nothing may beat it.

#![no_main]

use kata::{find_max_subarray_sum, max_subarray};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<i64>| {
    let Some(best) = max_subarray(&values) else {
        assert!(values.is_empty(), "None for non-empty input");
        assert_eq!(find_max_subarray_sum(&values), 0);
        return;
    };

    // Property 1: witness is a non-empty in-bounds range
    assert!(best.start < best.end && best.end <= values.len());

    // Property 2: witness sums to the reported value
    let sum: i128 = values[best.start..best.end]
        .iter()
        .map(|&v| i128::from(v))
        .sum();
    assert_eq!(sum, best.sum);

    // Property 3: no range does better (quadratic, so keep inputs short)
    if values.len() <= 256 {
        for start in 0..values.len() {
            let mut running = 0i128;
            for &v in &values[start..] {
                running += i128::from(v);
                assert!(running <= best.sum, "range from {} beats Kadane", start);
            }
        }
    }

    assert_eq!(find_max_subarray_sum(&values), best.sum);
});
