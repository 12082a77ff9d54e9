// LexcopHandle: top-level integration point.
//
// Owns the dictionary and the normalizer and provides a unified API for
// validity checks, suggestion generation, tokenization, and line checking.
//
// Design notes:
// - The handle owns the data; the speller and suggester are lightweight
//   borrowing values created on the fly in each method call, so the handle
//   has no self-referential lifetimes and stays trivially Send + Sync.
// - Options are stored directly in the handle and passed along when
//   methods are called.

use std::path::Path;

use lexcop_core::enums::TokenType;

use crate::dictionary::{Dictionary, DictionaryError};
use crate::morphology::EnglishRuleNormalizer;
use crate::speller::EnglishSpeller;
use crate::suggestion::{MAX_SUGGESTIONS, SUGGESTION_DIST, Suggester};
use crate::tokenizer;

/// Error type for handle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum LexcopError {
    /// A dictionary path could not be loaded.
    #[error("failed to load dictionary: {0}")]
    DictionaryLoad(#[from] DictionaryError),

    /// The given paths produced no words at all.
    #[error("no words loaded from the given dictionary paths")]
    EmptyDictionary,
}

/// Top-level handle owning the dictionary and normalizer.
#[derive(Debug)]
pub struct LexcopHandle {
    dictionary: Dictionary,
    normalizer: EnglishRuleNormalizer,

    /// Maximum number of suggestions to return.
    max_suggestions: usize,

    /// Maximum weighted edit distance for suggestion candidates.
    max_distance: u32,
}

impl LexcopHandle {
    /// Create a handle by loading every word list in `paths`.
    ///
    /// Fails if any path cannot be read, or if the result is empty --
    /// a checker without known words would flag everything.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, LexcopError> {
        let dictionary = Dictionary::from_paths(paths)?;
        if dictionary.is_empty() {
            return Err(LexcopError::EmptyDictionary);
        }
        Ok(Self::from_dictionary(dictionary))
    }

    /// Create a handle around an already-built dictionary.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            normalizer: EnglishRuleNormalizer::new(),
            max_suggestions: MAX_SUGGESTIONS,
            max_distance: SUGGESTION_DIST,
        }
    }

    /// Set the maximum number of suggestions per query.
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.max_suggestions = max_suggestions;
    }

    /// Set the maximum weighted edit distance for suggestion candidates.
    pub fn set_max_distance(&mut self, max_distance: u32) {
        self.max_distance = max_distance;
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn speller(&self) -> EnglishSpeller<'_> {
        EnglishSpeller::new(&self.dictionary, &self.normalizer)
    }

    /// Check whether `word` is a recognizable English word.
    pub fn spell(&self, word: &str) -> bool {
        self.speller().is_valid(word, true)
    }

    /// Ranked correction candidates for `word`, closest first.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        Suggester::with_limits(&self.dictionary, self.max_distance, self.max_suggestions)
            .suggest(word)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// The rejected word units of one input line, in input order and as
    /// originally cased. Stream-level deduplication is the caller's job.
    pub fn check_line(&self, line: &str) -> Vec<String> {
        let speller = self.speller();
        tokenizer::words(line)
            .into_iter()
            .filter(|word| !speller.is_valid(word, true))
            .collect()
    }

    /// Tokenize `text` into (type, text) pairs.
    pub fn tokenize(&self, text: &str) -> Vec<(TokenType, String)> {
        let chars: Vec<char> = text.chars().collect();
        let mut pos = 0;
        let mut out = Vec::new();
        loop {
            let (kind, len) = tokenizer::next_token(&chars, pos);
            if kind == TokenType::None {
                break;
            }
            out.push((kind, chars[pos..pos + len].iter().collect()));
            pos += len;
        }
        out
    }
}
