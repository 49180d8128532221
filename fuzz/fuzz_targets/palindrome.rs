// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for reversal and the palindrome check on arbitrary UTF-8.

#![no_main]

use kata::{is_palindrome, reverse_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let reversed = reverse_string(data);
    assert_eq!(reverse_string(&reversed), data);
    assert_eq!(reversed.chars().count(), data.chars().count());

    // Never panics, including on a string glued to its own reversal
    let _ = is_palindrome(data);
    let mirrored = format!("{}{}", data, reversed);
    let _ = is_palindrome(&mirrored);
});
