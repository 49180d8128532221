// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Labeled sequence generators.
//!
//! Both generators walk `1..=n` once and emit one label per number. The
//! classic one has the `3 -> Fizz, 5 -> Buzz` rules baked in; the custom one
//! takes a [`RuleSet`] and concatenates every matching label in ascending
//! divisor order, falling back to the decimal number when nothing matched.

use crate::contracts::check_labels_len;
use crate::rules::RuleSet;

/// Classic FizzBuzz over `1..=n`.
///
/// ```
/// assert_eq!(
///     kata::fizzbuzz(15)[9..],
///     ["Buzz", "11", "Fizz", "13", "14", "FizzBuzz"]
/// );
/// ```
pub fn fizzbuzz(n: u64) -> Vec<String> {
    let labels: Vec<String> = (1..=n)
        .map(|i| match (i % 3, i % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => i.to_string(),
        })
        .collect();

    check_labels_len(&labels, n);
    labels
}

/// FizzBuzz with caller-supplied rules.
///
/// For `i = 6` and rules `{2: "Even", 3: "Three"}` the label is `"EvenThree"`:
/// labels concatenate in ascending divisor order, never insertion order. An
/// empty rule set yields the decimal numbers.
pub fn custom_fizzbuzz(n: u64, rules: &RuleSet) -> Vec<String> {
    let labels: Vec<String> = (1..=n)
        .map(|i| {
            let mut label = String::new();
            for (divisor, word) in rules {
                if i % divisor == 0 {
                    label.push_str(word);
                }
            }
            if label.is_empty() {
                i.to_string()
            } else {
                label
            }
        })
        .collect();

    check_labels_len(&labels, n);
    labels
}
