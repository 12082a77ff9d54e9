// Lexical validity module

pub mod english;

pub use english::EnglishSpeller;

/// Tokens of this length or shorter are presumed not misspelled
/// (acronyms, loop variables) and accepted without any lookup.
pub const MIN_LEN: usize = 3;

/// Minimum token length for the compound-word decomposition check.
pub const MIN_COMBI_LEN: usize = 8;

/// Trait for spell checkers.
///
/// The full oracle contract carries an explicit decomposition flag
/// ([`EnglishSpeller::is_valid`]); this trait is the plain surface for
/// callers that always want the default behavior.
pub trait Speller {
    /// Check whether the word is recognized as correctly spelled.
    fn spell(&self, word: &str) -> bool;
}
