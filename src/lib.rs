//! Classic sequence and search exercises.
//!
//! Seven small, pure functions over in-memory input. None of them keeps state
//! between calls, none of them calls another, and every degenerate input has a
//! documented answer instead of an error.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────┐
//! │ fizzbuzz.rs  │   │  strings.rs  │   │    fibonacci.rs      │
//! │ (fizzbuzz,   │   │ (reverse,    │   │ (Fibonacci iterator, │
//! │  custom_*)   │   │  palindrome) │   │  fibonacci prefix)   │
//! └──────┬───────┘   └──────────────┘   └──────────────────────┘
//!        │
//!        ▼
//! ┌──────────────┐   ┌──────────────────────────────────────────┐
//! │   rules.rs   │   │               search/                     │
//! │  (RuleSet,   │   │  subarray.rs (Kadane)  two_sum.rs (hash)  │
//! │  RuleError)  │   └──────────────────────────────────────────┘
//! └──────────────┘
//!        contracts.rs: debug-build postcondition checks for all of the above
//! ```
//!
//! # Degenerate inputs
//!
//! | Function                | Input            | Result         |
//! |-------------------------|------------------|----------------|
//! | `fizzbuzz`              | `0`              | empty          |
//! | `custom_fizzbuzz`       | empty rule set   | decimal labels |
//! | `fibonacci`             | `n <= 0`         | empty          |
//! | `find_max_subarray_sum` | `[]`             | `0`            |
//! | `two_sum`               | no matching pair | `None`         |
//!
//! # Usage
//!
//! ```
//! use kata::{find_max_subarray_sum, fizzbuzz, two_sum, IndexPair};
//!
//! assert_eq!(fizzbuzz(5), ["1", "2", "Fizz", "4", "Buzz"]);
//! assert_eq!(find_max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), 6);
//! assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some(IndexPair(0, 1)));
//! ```

// Module declarations
pub mod contracts;
mod fibonacci;
mod fizzbuzz;
mod rules;
mod search;
mod strings;
#[doc(hidden)]
pub mod testing;
mod types;

// Re-exports for public API
pub use fibonacci::{fibonacci, Fibonacci};
pub use fizzbuzz::{custom_fizzbuzz, fizzbuzz};
pub use rules::{Rule, RuleError, RuleSet};
pub use search::{find_max_subarray_sum, max_subarray, two_sum};
pub use strings::{is_palindrome, reverse_string};
pub use types::{IndexPair, Subarray};
