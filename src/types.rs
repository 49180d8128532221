// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types shared by the search functions.

use serde::Serialize;
use std::fmt;

/// A contiguous, non-empty range of the input together with its sum.
///
/// `start` is inclusive and `end` is exclusive, so `input[start..end]` is the
/// witness slice and `end - start >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subarray {
    pub start: usize,
    pub end: usize,
    pub sum: i128,
}

impl Subarray {
    /// Number of elements in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: a subarray is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Two distinct positions, earlier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndexPair(pub usize, pub usize);

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        (pair.0, pair.1)
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
