// Morphological normalization module

mod english;

pub use english::EnglishRuleNormalizer;

use lexcop_core::enums::WordClass;

/// Trait for morphological normalizers.
///
/// Abstracts over normalizer backends so the oracle is testable without
/// any particular linguistic machinery; a small rule table is enough.
///
/// Implementations must be total: a word the backend cannot process is
/// returned unchanged (identity fallback), never an error. They must also
/// be dictionary-unaware -- a stem is a rule-based reduction, not a lookup.
pub trait Normalizer {
    /// Return the canonical dictionary form of `word` for one word class.
    fn lemmatize(&self, word: &str, class: WordClass) -> String;

    /// Return a stemmed form of `word`, coarser than any lemma.
    fn stem(&self, word: &str) -> String;
}
