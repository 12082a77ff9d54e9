// Rule-based English normalizer: inflectional suffix stripping.
//
// A deliberately small backend for the Normalizer capability. It handles
// the regular inflection patterns (plurals, verb -ing/-ed, comparative
// -er/-est) without any dictionary; irregular forms fall back to identity.

use lexcop_core::enums::WordClass;

use super::Normalizer;

/// Final consonants that are doubled before -ing/-ed/-er/-est and must be
/// reduced after stripping the suffix ("running" -> "run"). 'l', 's' and
/// 'f' are excluded: their doubles are part of the base ("telling",
/// "passing", "stuffing").
const UNDOUBLE_FINALS: &[char] = &['b', 'd', 'g', 'k', 'm', 'n', 'p', 'r', 't'];

/// Endings that take -es rather than -s in the plural / third person.
const SIBILANT_ENDINGS: &[&str] = &["s", "x", "z", "ch", "sh"];

/// Suffixes tried by the stemmer, longest-match first. Applied repeatedly
/// until no rule fires, so "hopelessly" reduces through "hopeless" to
/// "hope".
const STEM_SUFFIXES: &[&str] = &[
    "ations", "ation", "ments", "ment", "ness", "ings", "tion", "able", "ible", "edly", "less",
    "ful", "ing", "ers", "ies", "est", "ous", "ive", "ed", "er", "ly", "al", "es", "s",
];

/// Shortest base a rule is allowed to leave behind.
const MIN_BASE: usize = 2;

/// Strip `suffix` from `word` if the remaining base has at least
/// `min_base` characters.
fn strip<'a>(word: &'a str, suffix: &str, min_base: usize) -> Option<&'a str> {
    let base = word.strip_suffix(suffix)?;
    (base.len() >= min_base).then_some(base)
}

/// Reduce a doubled final consonant left behind by suffix stripping.
fn undouble(base: &str) -> String {
    let chars: Vec<char> = base.chars().collect();
    let n = chars.len();
    if n >= 3 && chars[n - 1] == chars[n - 2] && UNDOUBLE_FINALS.contains(&chars[n - 1]) {
        chars[..n - 1].iter().collect()
    } else {
        base.to_string()
    }
}

fn ends_in_sibilant(base: &str) -> bool {
    SIBILANT_ENDINGS.iter().any(|s| base.ends_with(s))
}

/// Rule-based English normalizer.
///
/// Stateless; one instance serves any number of queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRuleNormalizer;

impl EnglishRuleNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn noun_lemma(&self, word: &str) -> Option<String> {
        if let Some(base) = strip(word, "men", MIN_BASE) {
            return Some(format!("{base}man"));
        }
        if word.len() > 4 {
            if let Some(base) = strip(word, "ies", MIN_BASE) {
                return Some(format!("{base}y"));
            }
            if let Some(base) = strip(word, "ves", MIN_BASE) {
                return Some(format!("{base}f"));
            }
        }
        if let Some(base) = strip(word, "es", MIN_BASE) {
            if ends_in_sibilant(base) {
                return Some(base.to_string());
            }
        }
        if !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is") {
            if let Some(base) = strip(word, "s", 3) {
                return Some(base.to_string());
            }
        }
        None
    }

    fn verb_lemma(&self, word: &str) -> Option<String> {
        if word.len() > 4 {
            if let Some(base) = strip(word, "ying", MIN_BASE) {
                return Some(format!("{base}ie"));
            }
            if let Some(base) = strip(word, "ies", MIN_BASE) {
                return Some(format!("{base}y"));
            }
            if let Some(base) = strip(word, "ied", MIN_BASE) {
                return Some(format!("{base}y"));
            }
        }
        if let Some(base) = strip(word, "es", MIN_BASE) {
            if ends_in_sibilant(base) {
                return Some(base.to_string());
            }
        }
        if let Some(base) = strip(word, "ing", MIN_BASE) {
            return Some(undouble(base));
        }
        if let Some(base) = strip(word, "ed", MIN_BASE) {
            return Some(undouble(base));
        }
        if !word.ends_with("ss") {
            if let Some(base) = strip(word, "s", 3) {
                return Some(base.to_string());
            }
        }
        None
    }

    fn adjective_lemma(&self, word: &str) -> Option<String> {
        if word.len() > 5 {
            if let Some(base) = strip(word, "iest", MIN_BASE) {
                return Some(format!("{base}y"));
            }
        }
        if word.len() > 4 {
            if let Some(base) = strip(word, "ier", MIN_BASE) {
                return Some(format!("{base}y"));
            }
        }
        if let Some(base) = strip(word, "est", MIN_BASE) {
            return Some(undouble(base));
        }
        if let Some(base) = strip(word, "er", MIN_BASE) {
            return Some(undouble(base));
        }
        None
    }
}

impl Normalizer for EnglishRuleNormalizer {
    fn lemmatize(&self, word: &str, class: WordClass) -> String {
        let lemma = match class {
            WordClass::Noun => self.noun_lemma(word),
            WordClass::Verb => self.verb_lemma(word),
            // Regular adverbs are already base forms; -ly derivation is
            // left to the stemmer.
            WordClass::Adjective => self.adjective_lemma(word),
            WordClass::Adverb => None,
        };
        lemma.unwrap_or_else(|| word.to_string())
    }

    fn stem(&self, word: &str) -> String {
        let mut current = word.to_string();
        loop {
            let mut reduced = None;
            for suffix in STEM_SUFFIXES {
                if let Some(base) = strip(&current, suffix, 3) {
                    reduced = Some(undouble(base));
                    break;
                }
            }
            match reduced {
                Some(next) => current = next,
                None => return current,
            }
        }
    }
}
