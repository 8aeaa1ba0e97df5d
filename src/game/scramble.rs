use rand::{seq::SliceRandom, Rng};

/// A word can only be scrambled into something different when it has at
/// least two distinct characters ("a", "zz" and "" have no other permutation).
pub fn can_scramble(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|c| c != first),
        None => false,
    }
}

/// Shuffle the characters of `word` until the result differs from it.
///
/// The comparison is case-sensitive. Callers must check [`can_scramble`]
/// first, otherwise this never returns.
pub fn scramble(word: &str, rng: &mut impl Rng) -> String {
    debug_assert!(can_scramble(word), "'{word}' cannot be scrambled");

    let mut letters: Vec<char> = word.chars().collect();
    loop {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return candidate;
        }
    }
}

/// True when `a` is a rearrangement of the characters of `b`.
#[cfg(test)]
pub(crate) fn is_permutation(a: &str, b: &str) -> bool {
    let mut left: Vec<char> = a.chars().collect();
    let mut right: Vec<char> = b.chars().collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
