//! Properties of reversal and the palindrome predicate.

use kata::{is_palindrome, reverse_string};
use proptest::prelude::*;

proptest! {
    /// Property: reversal is an involution.
    #[test]
    fn prop_reverse_involution(s in any::<String>()) {
        prop_assert_eq!(reverse_string(&reverse_string(&s)), s);
    }

    /// Property: reversal keeps the char count and the multiset of chars.
    #[test]
    fn prop_reverse_preserves_chars(s in any::<String>()) {
        let reversed = reverse_string(&s);
        prop_assert_eq!(reversed.chars().count(), s.chars().count());

        let mut before: Vec<char> = s.chars().collect();
        let mut after: Vec<char> = reversed.chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// Property: a string followed by its reversal is a palindrome.
    #[test]
    fn prop_mirrored_is_palindrome(s in "[a-zA-Z ]{0,20}") {
        let mirrored = format!("{}{}", s, reverse_string(&s));
        prop_assert!(is_palindrome(&mirrored));
    }

    /// Property: the verdict ignores where whitespace goes.
    #[test]
    fn prop_palindrome_ignores_whitespace(s in "[a-c]{0,10}", gaps in prop::collection::vec(0usize..10, 0..4)) {
        let mut spaced = s.clone();
        for gap in gaps {
            let at = gap.min(spaced.len());
            spaced.insert(at, ' ');
        }
        prop_assert_eq!(is_palindrome(&spaced), is_palindrome(&s));
    }

    /// Property: the verdict ignores ASCII case.
    #[test]
    fn prop_palindrome_ignores_case(s in "[a-zA-Z]{0,12}") {
        prop_assert_eq!(is_palindrome(&s.to_uppercase()), is_palindrome(&s));
    }

    /// Property: a palindrome reversed is still a palindrome.
    #[test]
    fn prop_palindrome_closed_under_reversal(s in "[ab ]{0,12}") {
        prop_assert_eq!(is_palindrome(&reverse_string(&s)), is_palindrome(&s));
    }
}
