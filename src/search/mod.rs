// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear-scan searches over integer slices.
//!
//! Two single-pass algorithms: Kadane's maximum contiguous subarray and the
//! hash-map two-sum lookup. Both read the input once, left to right, and never
//! allocate proportional to anything but the input.

mod subarray;
mod two_sum;

pub use subarray::{find_max_subarray_sum, max_subarray};
pub use two_sum::two_sum;
