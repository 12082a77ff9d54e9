// English lexical validity oracle.
//
// Decides whether a token is a real English word: a dictionary entry, a
// morphological variant of one, a British spelling of one, or a
// concatenation of two independently valid sub-words.

use lexcop_core::character::lower_all;
use lexcop_core::enums::WordClass;

use crate::dictionary::Dictionary;
use crate::morphology::Normalizer;

use super::{MIN_COMBI_LEN, MIN_LEN, Speller};

/// The lexical validity oracle over a borrowed dictionary and normalizer.
///
/// Stateless across queries; safe to share between threads that check
/// distinct tokens concurrently.
pub struct EnglishSpeller<'a> {
    dictionary: &'a Dictionary,
    normalizer: &'a dyn Normalizer,
}

impl<'a> EnglishSpeller<'a> {
    pub fn new(dictionary: &'a Dictionary, normalizer: &'a dyn Normalizer) -> Self {
        Self {
            dictionary,
            normalizer,
        }
    }

    /// Check whether `token` is a valid word.
    ///
    /// `allow_decomposition` controls whether the token may be treated as a
    /// concatenation of two shorter valid words. The checks, short-circuiting
    /// on the first success:
    ///
    /// 1. tokens no longer than [`MIN_LEN`] are accepted outright (only when
    ///    decomposition is allowed, which distinguishes top-level tokens
    ///    from decomposition sub-parts);
    /// 2. verbatim dictionary lookup;
    /// 3. per-word-class lemma lookup;
    /// 4. stem lookup;
    /// 5. British-variant lookup;
    /// 6. for tokens of at least [`MIN_COMBI_LEN`] characters, a single
    ///    split into two halves that are both valid with decomposition
    ///    disabled, so splitting never recurses past one level.
    pub fn is_valid(&self, token: &str, allow_decomposition: bool) -> bool {
        self.is_valid_folded(&lower_all(token), allow_decomposition)
    }

    /// The oracle proper, over an already-folded word.
    fn is_valid_folded(&self, word: &str, allow_decomposition: bool) -> bool {
        let len = word.chars().count();
        if allow_decomposition && len <= MIN_LEN {
            return true;
        }
        if self.dictionary.contains(word) {
            return true;
        }
        for class in WordClass::ALL {
            if self.dictionary.contains(&self.normalizer.lemmatize(word, class)) {
                return true;
            }
        }
        if self.dictionary.contains(&self.normalizer.stem(word)) {
            return true;
        }
        if self.dictionary.contains(&self.british_variant(word)) {
            return true;
        }
        if allow_decomposition && len >= MIN_COMBI_LEN {
            let chars: Vec<char> = word.chars().collect();
            for i in MIN_LEN..=len - MIN_LEN {
                let head: String = chars[..i].iter().collect();
                let tail: String = chars[i..].iter().collect();
                if self.is_valid_folded(&head, false) && self.is_valid_folded(&tail, false) {
                    return true;
                }
            }
        }
        false
    }

    /// Rewrite a British spelling to its American dictionary form.
    ///
    /// Lemmatizes per word class and returns on the first class whose lemma
    /// ends in "re" (rewritten to "er", metre -> meter) or "our" (rewritten
    /// to "or", colour -> color). If no class matches either suffix rule the
    /// word is returned unchanged.
    fn british_variant(&self, word: &str) -> String {
        for class in WordClass::ALL {
            let lemma = self.normalizer.lemmatize(word, class);
            if lemma.len() > 2 && lemma.ends_with("re") {
                return format!("{}er", &lemma[..lemma.len() - 2]);
            }
            if lemma.len() > 3 && lemma.ends_with("our") {
                return format!("{}or", &lemma[..lemma.len() - 3]);
            }
        }
        word.to_string()
    }
}

impl Speller for EnglishSpeller<'_> {
    fn spell(&self, word: &str) -> bool {
        self.is_valid(word, true)
    }
}
