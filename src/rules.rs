// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Divisor-to-label rules for the configurable FizzBuzz generator.
//!
//! A `RuleSet` is checked once at construction: every divisor is positive and
//! every label is non-empty. After that, `custom_fizzbuzz` can take `i % d`
//! without guarding against a zero divisor, and an empty label can never make
//! a matched number look unmatched.
//!
//! Rules are kept in a `BTreeMap`, so iteration is always in ascending divisor
//! order and composite matches concatenate deterministically:
//!
//! ```
//! use kata::{custom_fizzbuzz, RuleSet};
//!
//! let rules = RuleSet::new([(3, "Three"), (2, "Even")])?;
//! assert_eq!(custom_fizzbuzz(6, &rules)[5], "EvenThree");
//! # Ok::<(), kata::RuleError>(())
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

/// Error type for rule construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Divisor `0` would divide by zero.
    ZeroDivisor,
    /// A rule with an empty label for the given divisor.
    EmptyLabel { divisor: u64 },
    /// Text rule without the `DIVISOR=LABEL` shape.
    Malformed(String),
    /// Divisor text is not a positive integer.
    InvalidDivisor(String),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::ZeroDivisor => write!(f, "divisor must be positive, got 0"),
            RuleError::EmptyLabel { divisor } => {
                write!(f, "label for divisor {} is empty", divisor)
            }
            RuleError::Malformed(text) => {
                write!(f, "rule '{}' is not of the form DIVISOR=LABEL", text)
            }
            RuleError::InvalidDivisor(text) => {
                write!(f, "divisor '{}' is not a positive integer", text)
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// A single `divisor => label` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    divisor: u64,
    label: String,
}

impl Rule {
    pub fn new(divisor: u64, label: impl Into<String>) -> Result<Self, RuleError> {
        let label = label.into();
        if divisor == 0 {
            return Err(RuleError::ZeroDivisor);
        }
        if label.is_empty() {
            return Err(RuleError::EmptyLabel { divisor });
        }
        Ok(Rule { divisor, label })
    }

    pub fn divisor(&self) -> u64 {
        self.divisor
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Parses `DIVISOR=LABEL`, e.g. `3=Fizz`. Only the first `=` splits, so labels
/// may themselves contain `=`.
impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (divisor, label) = s
            .split_once('=')
            .ok_or_else(|| RuleError::Malformed(s.to_string()))?;
        let divisor = divisor
            .trim()
            .parse::<u64>()
            .map_err(|_| RuleError::InvalidDivisor(divisor.trim().to_string()))?;
        Rule::new(divisor, label)
    }
}

/// Ordered, validated divisor-to-label mapping.
///
/// Inserting a divisor twice keeps the last label, the same way a map literal
/// with a repeated key would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeMap<u64, String>,
}

impl RuleSet {
    /// Build a rule set from `(divisor, label)` pairs in any order.
    pub fn new<I, S>(pairs: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (u64, S)>,
        S: Into<String>,
    {
        let mut set = RuleSet::default();
        for (divisor, label) in pairs {
            set.insert(Rule::new(divisor, label)?);
        }
        Ok(set)
    }

    /// The classic `{3: "Fizz", 5: "Buzz"}` rules.
    pub fn classic() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(3, "Fizz".to_string());
        rules.insert(5, "Buzz".to_string());
        RuleSet { rules }
    }

    pub fn insert(&mut self, rule: Rule) {
        self.rules.insert(rule.divisor, rule.label);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in ascending divisor order.
    pub fn iter(&self) -> btree_map::Iter<'_, u64, String> {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        let mut set = RuleSet::default();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = (&'a u64, &'a String);
    type IntoIter = btree_map::Iter<'a, u64, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
