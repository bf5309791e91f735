//! Character reversal.
//!
//! Reversal works on Unicode scalar values (`char`), not grapheme clusters.
//! A base letter followed by a combining mark comes out with the mark first,
//! and multi-scalar emoji sequences are split apart. Applying the reversal
//! twice always yields the original string.

use tracing::trace;

/// Returns `text` with its characters in reverse order.
///
/// ## Examples
///
/// ```rust
/// use string_utils::reverse_string;
///
/// assert_eq!(reverse_string("hello"), "olleh");
/// assert_eq!(reverse_string(""), "");
/// ```
pub fn reverse_string(text: &str) -> String {
    trace!(len = text.len(), "reversing");
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_a_word() {
        assert_eq!(reverse_string("hello"), "olleh");
    }

    #[test]
    fn empty_string() {
        assert_eq!(reverse_string(""), "");
    }

    #[test]
    fn single_character() {
        assert_eq!(reverse_string("a"), "a");
    }

    #[test]
    fn keeps_whitespace_and_punctuation() {
        assert_eq!(reverse_string(" a, b! "), " !b ,a ");
    }

    #[test]
    fn multibyte_characters_stay_intact() {
        assert_eq!(reverse_string("héllo"), "olléh");
        assert_eq!(reverse_string("你好"), "好你");
        assert_eq!(reverse_string("a\u{1F389}b"), "b\u{1F389}a");
    }

    #[test]
    fn combining_marks_are_reordered() {
        // "e" + COMBINING ACUTE ACCENT
        assert_eq!(reverse_string("e\u{0301}x"), "x\u{0301}e");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: reversing twice gives back the input
        #[test]
        fn reverse_is_an_involution(s in any::<String>()) {
            prop_assert_eq!(reverse_string(&reverse_string(&s)), s);
        }

        /// Property: reversal preserves byte and char length
        #[test]
        fn preserves_length(s in any::<String>()) {
            let reversed = reverse_string(&s);
            prop_assert_eq!(reversed.len(), s.len());
            prop_assert_eq!(reversed.chars().count(), s.chars().count());
        }
    }
}
