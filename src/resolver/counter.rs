//! Counter-play against the adversary
//!
//! Since the adversary always keeps the largest feedback group, the worst case
//! of a guess is exactly what the player will get. The best counter-guess is
//! the one whose largest group is smallest.

use crate::core::{Feedback, Pattern, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Size of the group the adversary would keep for `guess`
///
/// # Examples
/// ```
/// use adversarial_wordle::core::Word;
/// use adversarial_wordle::resolver::worst_case_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates: Vec<Word> = ["slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// assert_eq!(worst_case_remaining(&guess, &candidates), 2);
/// ```
#[must_use]
pub fn worst_case_remaining(guess: &Word, candidates: &[Word]) -> usize {
    let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();

    for candidate in candidates {
        *counts
            .entry(Feedback::evaluate(guess, candidate).pattern())
            .or_insert(0) += 1;
    }

    counts.values().max().copied().unwrap_or(0)
}

/// Guess from `guess_pool` that minimizes the adversary's best reply
///
/// Ties prefer guesses that are still candidates (they can win outright),
/// then earlier positions in `guess_pool`. Returns the guess and its worst
/// case, or `None` if the guess pool is empty.
#[must_use]
pub fn best_counter_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, usize)> {
    let live: FxHashSet<&Word> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(position, guess)| {
            let worst = worst_case_remaining(guess, candidates);
            (worst, !live.contains(guess), position)
        })
        .min()
        .map(|(worst, _, position)| (&guess_pool[position], worst))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn worst_case_of_empty_pool_is_zero() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(worst_case_remaining(&guess, &[]), 0);
    }

    #[test]
    fn worst_case_when_nothing_splits() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        assert_eq!(worst_case_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn worst_case_of_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        assert_eq!(worst_case_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn picks_lowest_worst_case() {
        let guesses = words(&["zzzzz", "crane"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, worst) = best_counter_guess(&guesses, &candidates).unwrap();

        assert_eq!(best.text(), "CRANE");
        assert_eq!(worst, 2);
    }

    #[test]
    fn ties_prefer_live_candidates() {
        // Both split the pair perfectly; only SLATE can win outright
        let guesses = words(&["abcde", "slate"]);
        let candidates = words(&["slate", "fghij"]);

        let (best, worst) = best_counter_guess(&guesses, &candidates).unwrap();

        assert_eq!(worst, 1);
        assert_eq!(best.text(), "SLATE");
    }

    #[test]
    fn ties_then_follow_pool_order() {
        let guesses = words(&["aaaaa", "bbbbb"]);
        let candidates = words(&["ccccc"]);

        let (best, worst) = best_counter_guess(&guesses, &candidates).unwrap();
        assert_eq!(best.text(), "AAAAA");
        assert_eq!(worst, 1);
    }

    #[test]
    fn empty_guess_pool_is_none() {
        let candidates = words(&["slate"]);
        assert!(best_counter_guess(&[], &candidates).is_none());
    }
}
