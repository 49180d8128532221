// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `DIVISOR=LABEL` rule parsing.
//!
//! Parsing must return Err on garbage rather than panic, and anything that
//! parses must be usable by `custom_fizzbuzz` without dividing by zero.

#![no_main]

use kata::{custom_fizzbuzz, Rule, RuleSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let rules: Vec<Rule> = data.lines().filter_map(|line| line.parse().ok()).collect();

    for rule in &rules {
        assert!(rule.divisor() > 0);
        assert!(!rule.label().is_empty());
    }

    let set: RuleSet = rules.into_iter().collect();
    let labels = custom_fizzbuzz(64, &set);
    assert_eq!(labels.len(), 64);
    assert!(labels.iter().all(|l| !l.is_empty()));
});
