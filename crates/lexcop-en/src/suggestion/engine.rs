// Dictionary-scan suggester.

use lexcop_core::character::lower_all;

use crate::dictionary::Dictionary;

use super::distance::weighted_distance;
use super::pool::{Suggestion, SuggestionPool};

/// Default maximum weighted distance for kept candidates.
pub const SUGGESTION_DIST: u32 = 4;

/// Default number of suggestions retained per query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Scores every dictionary word within a length bound against a token and
/// keeps the closest few.
///
/// A candidate whose length differs from the token's by more than
/// `max_distance` is skipped before any scoring: a length gap of `d`
/// already forces an edit distance of at least `d`.
pub struct Suggester<'a> {
    dictionary: &'a Dictionary,
    max_distance: u32,
    max_suggestions: usize,
}

impl<'a> Suggester<'a> {
    /// Create a suggester with the default limits.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_limits(dictionary, SUGGESTION_DIST, MAX_SUGGESTIONS)
    }

    /// Create a suggester with explicit limits.
    pub fn with_limits(
        dictionary: &'a Dictionary,
        max_distance: u32,
        max_suggestions: usize,
    ) -> Self {
        Self {
            dictionary,
            max_distance,
            max_suggestions,
        }
    }

    /// Return at most `max_suggestions` dictionary words closest to
    /// `token`, ordered closest first. Every returned candidate is within
    /// `max_distance` of the folded token.
    pub fn suggest(&self, token: &str) -> Vec<Suggestion> {
        let word: Vec<char> = lower_all(token).chars().collect();
        let mut pool = SuggestionPool::new(self.max_suggestions);

        for candidate in self.dictionary.iter() {
            let candidate_len = candidate.chars().count();
            if candidate_len.abs_diff(word.len()) as u32 > self.max_distance {
                continue;
            }
            let candidate_chars: Vec<char> = candidate.chars().collect();
            let dist = weighted_distance(&word, &candidate_chars);
            if dist <= self.max_distance {
                pool.offer(candidate, dist);
            }
        }

        pool.into_sorted()
    }
}
