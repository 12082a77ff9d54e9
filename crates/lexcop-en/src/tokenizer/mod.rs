// Identifier tokenizer.
//
// Splits input text first on runs of non-alphabetic characters, then each
// alphabetic run on camelCase boundaries. Each word unit is what the
// validity oracle sees: "getUserID" yields "get", "User", "ID".

use lexcop_core::character::{is_lower, is_upper, is_word_char};
use lexcop_core::enums::TokenType;

/// Length of one camelCase word unit at the start of `text`.
///
/// The first character is known to be a word character. A lowercase run is
/// one unit; an uppercase letter followed by lowercase is one capitalized
/// unit; a run of uppercase letters is one acronym unit that ends before
/// any capital starting a capitalized word ("HTTPServer" -> "HTTP").
fn word_unit_length(text: &[char]) -> usize {
    if is_lower(text[0]) {
        let mut i = 1;
        while i < text.len() && is_lower(text[i]) {
            i += 1;
        }
        return i;
    }

    let mut i = 1;
    if i < text.len() && is_lower(text[i]) {
        while i < text.len() && is_lower(text[i]) {
            i += 1;
        }
        return i;
    }

    while i < text.len() && is_upper(text[i]) {
        if i + 1 < text.len() && is_lower(text[i + 1]) {
            break;
        }
        i += 1;
    }
    i
}

/// Find the next token starting at position `pos` in the text.
///
/// Returns `(TokenType, token_length)`. The caller advances `pos` by
/// `token_length` to process subsequent tokens.
pub fn next_token(text: &[char], pos: usize) -> (TokenType, usize) {
    if pos >= text.len() {
        return (TokenType::None, 0);
    }

    let slice = &text[pos..];
    if !is_word_char(slice[0]) {
        let mut i = 1;
        while i < slice.len() && !is_word_char(slice[i]) {
            i += 1;
        }
        return (TokenType::Separator, i);
    }

    (TokenType::Word, word_unit_length(slice))
}

/// The ordered word units of a line, as they appear in the input.
pub fn words(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut pos = 0;
    let mut out = Vec::new();
    loop {
        let (kind, len) = next_token(&chars, pos);
        if kind == TokenType::None {
            break;
        }
        if kind == TokenType::Word {
            out.push(chars[pos..pos + len].iter().collect());
        }
        pos += len;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Convenience: convert a &str to Vec<char> and call next_token at pos=0.
    fn tok(s: &str) -> (TokenType, usize) {
        let chars: Vec<char> = s.chars().collect();
        next_token(&chars, 0)
    }

    /// Convenience: tokenize an entire string into (type, text) pairs.
    fn tokenize_all(s: &str) -> Vec<(TokenType, String)> {
        let chars: Vec<char> = s.chars().collect();
        let mut pos = 0;
        let mut result = Vec::new();
        loop {
            let (tt, tlen) = next_token(&chars, pos);
            if tt == TokenType::None {
                break;
            }
            let text: String = chars[pos..pos + tlen].iter().collect();
            result.push((tt, text));
            pos += tlen;
        }
        result
    }

    // -- Empty and trivial inputs ---

    #[test]
    fn empty_text_returns_none() {
        assert_eq!(tok(""), (TokenType::None, 0));
    }

    #[test]
    fn pos_beyond_text_returns_none() {
        let chars: Vec<char> = "abc".chars().collect();
        assert_eq!(next_token(&chars, 3), (TokenType::None, 0));
        assert_eq!(next_token(&chars, 5), (TokenType::None, 0));
    }

    #[test]
    fn single_letter() {
        assert_eq!(tok("a"), (TokenType::Word, 1));
        assert_eq!(tok("X"), (TokenType::Word, 1));
    }

    #[test]
    fn single_separator() {
        assert_eq!(tok(" "), (TokenType::Separator, 1));
        assert_eq!(tok("_"), (TokenType::Separator, 1));
        assert_eq!(tok("7"), (TokenType::Separator, 1));
    }

    // -- Separator runs ---

    #[test]
    fn separator_runs_are_one_token() {
        let tokens = tokenize_all("a_42 b");
        assert_eq!(
            tokens,
            vec![
                (TokenType::Word, "a".to_string()),
                (TokenType::Separator, "_42 ".to_string()),
                (TokenType::Word, "b".to_string()),
            ]
        );
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        let tokens = tokenize_all("na\u{00EF}ve");
        assert_eq!(tokens[0], (TokenType::Word, "na".to_string()));
        assert_eq!(tokens[1], (TokenType::Separator, "\u{00EF}".to_string()));
        assert_eq!(tokens[2], (TokenType::Word, "ve".to_string()));
    }

    // -- camelCase splitting ---

    fn word_list(s: &str) -> Vec<String> {
        words(s)
    }

    #[test]
    fn lowercase_run_is_one_unit() {
        assert_eq!(word_list("getter"), ["getter"]);
    }

    #[test]
    fn camel_case_splits_at_capitals() {
        assert_eq!(word_list("getUserID"), ["get", "User", "ID"]);
        assert_eq!(word_list("parseJson"), ["parse", "Json"]);
    }

    #[test]
    fn acronym_run_keeps_trailing_word() {
        assert_eq!(word_list("HTTPServer"), ["HTTP", "Server"]);
        assert_eq!(word_list("XMLHttpRequest"), ["XML", "Http", "Request"]);
    }

    #[test]
    fn acronym_at_end_is_one_unit() {
        assert_eq!(word_list("ID"), ["ID"]);
        assert_eq!(word_list("userID"), ["user", "ID"]);
    }

    #[test]
    fn plural_acronym_splits_before_lowercase() {
        assert_eq!(word_list("IDs"), ["I", "Ds"]);
    }

    #[test]
    fn snake_case_splits_on_underscores() {
        assert_eq!(word_list("time_stamp_ms"), ["time", "stamp", "ms"]);
    }

    #[test]
    fn words_skips_separators_and_digits() {
        assert_eq!(word_list("foo123bar baz"), ["foo", "bar", "baz"]);
        assert_eq!(word_list("  \t"), Vec::<String>::new());
    }

    #[test]
    fn mixed_identifier_stream() {
        assert_eq!(
            word_list("let maxRetryCount = DEFAULT_TTL;"),
            ["let", "max", "Retry", "Count", "DEFAULT", "TTL"]
        );
    }
}
