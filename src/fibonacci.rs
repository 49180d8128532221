// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fibonacci sequence generation.
//!
//! Terms are `BigUint`, so the sequence never overflows: `F(93)` is the last
//! term that fits in a `u64`, and callers asking for a few hundred terms should
//! still get exact values.

use num_bigint::BigUint;
use std::mem;

use crate::contracts::check_fibonacci_prefix;

/// Unbounded iterator over `0, 1, 1, 2, 3, 5, ...`.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Fibonacci {
            current: BigUint::from(0u32),
            next: BigUint::from(1u32),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        // F(i+2) = F(i+1) + F(i)
        let following = &self.current + &self.next;
        let next = mem::replace(&mut self.next, following);
        Some(mem::replace(&mut self.current, next))
    }
}

/// The first `n` Fibonacci numbers, starting at `F(0) = 0`.
///
/// `n <= 0` gives an empty vector.
///
/// ```
/// let fib: Vec<u64> = kata::fibonacci(10)
///     .iter()
///     .map(|v| u64::try_from(v).unwrap())
///     .collect();
/// assert_eq!(fib, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn fibonacci(n: i64) -> Vec<BigUint> {
    let count = usize::try_from(n).unwrap_or(0);
    let terms: Vec<BigUint> = Fibonacci::new().take(count).collect();

    check_fibonacci_prefix(&terms);
    terms
}
