// Character classification and simple case mapping

/// Check whether a character belongs to a word token.
///
/// The tokenizer's alphabet is ASCII letters: identifiers are split on
/// everything else, so digits, underscores and non-ASCII text all act as
/// separators.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether a character is an uppercase ASCII letter.
///
/// camelCase boundaries are defined over ASCII case only; case-folded
/// dictionary words never reach this predicate.
pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Check whether a character is a lowercase ASCII letter.
pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Convert a character to its simple lowercase equivalent.
///
/// Uses Rust's built-in Unicode case mapping. For characters with
/// multi-character lowercase expansions, returns only the first character,
/// keeping the mapping one-to-one.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Case-fold a whole word with the one-to-one [`simple_lower`] mapping.
///
/// This is the canonical form dictionary entries and oracle queries share.
pub fn lower_all(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_chars_are_ascii_letters() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(!is_word_char('0'));
        assert!(!is_word_char('_'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('\u{00E4}')); // ä
    }

    #[test]
    fn ascii_case_tests() {
        assert!(is_upper('A'));
        assert!(!is_upper('a'));
        assert!(is_lower('z'));
        assert!(!is_lower('Z'));
        assert!(!is_upper('1'));
        assert!(!is_lower('1'));
    }

    #[test]
    fn simple_lower_basic_latin() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('Z'), 'z');
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_lower_extended() {
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(simple_lower('\u{00D6}'), '\u{00F6}'); // Ö -> ö
    }

    #[test]
    fn lower_all_folds_whole_word() {
        assert_eq!(lower_all("GetUserID"), "getuserid");
        assert_eq!(lower_all("colour"), "colour");
        assert_eq!(lower_all(""), "");
    }
}
