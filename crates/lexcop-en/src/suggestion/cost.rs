// Edit cost model: constants and the cheap-substitution table.

/// Cost of an edit the model considers a plausible slip: a confusable
/// substitution, one half of a doubled letter, an adjacent swap.
pub const COST_LOW: u32 = 1;

/// Cost of an arbitrary insertion, deletion, or substitution.
pub const COST_HIGH: u32 = 2;

/// Letter pairs whose substitution is charged at [`COST_LOW`], as a flat
/// (typed, intended) pair array.
///
/// The mapping is directional: a pair makes typing its first letter for
/// its second cheap, not the reverse. Most confusions are listed both
/// ways; the trailing one-way entries model devoicing-style slips that
/// are rarely made in reverse.
const CHEAP_SUBSTITUTIONS: &[char] = &[
    'a', 'e', 'e', 'a', 'e', 'i', 'i', 'e', 'a', 'o',
    'o', 'a', 'o', 'u', 'u', 'o', 'i', 'y', 'y', 'i',
    'b', 'v', 'v', 'b', 'm', 'n', 'n', 'm', 'r', 'l',
    'l', 'r', 'r', 't', 't', 'r', 'c', 'k', 'k', 'c',
    's', 'z', 'z', 's',
    // One-way entries.
    'u', 'i', 'y', 'e', 'f', 'v', 'g', 'j', 'd', 't',
];

/// Substitution cost for replacing `from` with `to`: zero when equal,
/// [`COST_LOW`] for a listed confusion, [`COST_HIGH`] otherwise.
pub fn substitution_cost(from: char, to: char) -> u32 {
    if from == to {
        return 0;
    }
    let cheap = CHEAP_SUBSTITUTIONS
        .chunks_exact(2)
        .any(|pair| pair[0] == from && pair[1] == to);
    if cheap { COST_LOW } else { COST_HIGH }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_characters_are_free() {
        assert_eq!(substitution_cost('a', 'a'), 0);
        assert_eq!(substitution_cost('z', 'z'), 0);
    }

    #[test]
    fn confusable_pairs_are_cheap_both_ways() {
        assert_eq!(substitution_cost('b', 'v'), COST_LOW);
        assert_eq!(substitution_cost('v', 'b'), COST_LOW);
        assert_eq!(substitution_cost('m', 'n'), COST_LOW);
        assert_eq!(substitution_cost('n', 'm'), COST_LOW);
        assert_eq!(substitution_cost('r', 'l'), COST_LOW);
        assert_eq!(substitution_cost('r', 't'), COST_LOW);
    }

    #[test]
    fn one_way_entries_stay_one_way() {
        assert_eq!(substitution_cost('u', 'i'), COST_LOW);
        assert_eq!(substitution_cost('i', 'u'), COST_HIGH);
        assert_eq!(substitution_cost('f', 'v'), COST_LOW);
        assert_eq!(substitution_cost('v', 'f'), COST_HIGH);
        assert_eq!(substitution_cost('d', 't'), COST_LOW);
        assert_eq!(substitution_cost('t', 'd'), COST_HIGH);
    }

    #[test]
    fn unrelated_characters_are_expensive() {
        assert_eq!(substitution_cost('a', 'x'), COST_HIGH);
        assert_eq!(substitution_cost('q', 'w'), COST_HIGH);
    }

    #[test]
    fn table_is_well_formed() {
        assert_eq!(CHEAP_SUBSTITUTIONS.len() % 2, 0);
    }
}
