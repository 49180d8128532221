// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kata command-line interface.
//!
//! One subcommand per library operation plus `demo`, which runs each of them
//! once on fixed sample input. `--json` switches the per-operation
//! subcommands to a single JSON document on stdout.

pub mod display;

use clap::{Parser, Subcommand};
use kata::Rule;

#[derive(Parser)]
#[command(
    name = "kata",
    about = "Classic sequence and search exercises",
    version
)]
pub struct Cli {
    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every operation once on fixed sample input
    Demo,

    /// Label the numbers 1..=N (Fizz/Buzz, or custom rules)
    Fizzbuzz {
        /// Inclusive upper bound
        n: u64,

        /// Custom rule as DIVISOR=LABEL (repeatable)
        ///
        /// When at least one rule is given, the classic 3/5 rules are replaced
        /// entirely. Matching labels concatenate in ascending divisor order.
        #[arg(short, long = "rule", value_name = "DIVISOR=LABEL")]
        rules: Vec<Rule>,
    },

    /// Reverse a string character by character
    Reverse { text: String },

    /// Check whether a string is a palindrome (ignoring whitespace and case)
    Palindrome { text: String },

    /// Print the first N Fibonacci numbers
    Fibonacci {
        /// Number of terms; zero or negative prints nothing
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Maximum contiguous subarray sum (Kadane)
    MaxSubarray {
        /// Input numbers
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Also print the range that achieves the maximum
        #[arg(long)]
        witness: bool,
    },

    /// Find two indices whose values add up to a target
    TwoSum {
        /// Target sum
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        /// Input numbers
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}
