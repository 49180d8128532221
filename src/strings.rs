// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String reversal and palindrome check.
//!
//! Both operate on Unicode scalar values (`char`), not bytes, so multi-byte
//! text reverses without splitting a code point.

use crate::contracts::check_reversal;

/// Reverse the character order of `value`.
///
/// ```
/// assert_eq!(kata::reverse_string("hello"), "olleh");
/// assert_eq!(kata::reverse_string("café"), "éfac");
/// ```
pub fn reverse_string(value: &str) -> String {
    let reversed: String = value.chars().rev().collect();
    check_reversal(value, &reversed);
    reversed
}

/// Whitespace in the wide sense: Unicode `White_Space` plus the ASCII
/// separator controls U+001C..=U+001F (file, group, record and unit
/// separators).
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whitespace- and case-insensitive palindrome check.
///
/// # Algorithm
///
/// 1. Drop every whitespace character, separator controls included
/// 2. Lowercase
/// 3. Compare with the reversal
///
/// Empty and single-character strings are palindromes.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .chars()
        .filter(|&c| !is_space(c))
        .collect::<String>()
        .to_lowercase()
        .chars()
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}
