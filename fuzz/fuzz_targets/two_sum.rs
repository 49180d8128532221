// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the two-sum lookup.
//!
//! Checks the returned pair against the target and, for short inputs, that
//! no pair completing earlier was skipped.

#![no_main]

use arbitrary::Arbitrary;
use kata::{two_sum, IndexPair};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<i64>,
    target: i64,
}

fn adds_up(values: &[i64], i: usize, j: usize, target: i64) -> bool {
    i128::from(values[i]) + i128::from(values[j]) == i128::from(target)
}

fuzz_target!(|input: Input| {
    let Input { values, target } = input;

    match two_sum(&values, target) {
        Some(IndexPair(i, j)) => {
            assert!(i < j && j < values.len(), "pair ({}, {}) out of order", i, j);
            assert!(adds_up(&values, i, j, target));

            if values.len() <= 256 {
                // Nothing completes before j, and i is the earliest partner
                for jj in 0..j {
                    for ii in 0..jj {
                        assert!(!adds_up(&values, ii, jj, target));
                    }
                }
                for ii in 0..i {
                    assert!(!adds_up(&values, ii, j, target));
                }
            }
        }
        None => {
            if values.len() <= 256 {
                for j in 0..values.len() {
                    for i in 0..j {
                        assert!(!adds_up(&values, i, j, target), "missed ({}, {})", i, j);
                    }
                }
            }
        }
    }
});
