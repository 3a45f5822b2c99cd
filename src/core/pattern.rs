//! Compact feedback pattern
//!
//! A pattern encodes the states of a feedback row using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. It is the grouping key used
//! when partitioning candidates.

use super::feedback::LetterState;
use super::word::WORD_LENGTH;

/// Feedback states packed into one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Encode a row of states
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::{LetterState, Pattern};
    ///
    /// // Absent, Absent, Correct, Absent, Correct
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// let states = [
    ///     LetterState::Absent,
    ///     LetterState::Absent,
    ///     LetterState::Correct,
    ///     LetterState::Absent,
    ///     LetterState::Correct,
    /// ];
    /// assert_eq!(Pattern::from_states(&states).value(), 180);
    /// ```
    #[must_use]
    pub fn from_states(states: &[LetterState; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for state in states {
            pattern += state.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decode back into per-position states
    #[must_use]
    pub fn states(self) -> [LetterState; WORD_LENGTH] {
        let mut val = self.0;
        std::array::from_fn(|_| {
            let state = LetterState::from_digit(val % 3);
            val /= 3;
            state
        })
    }

    #[must_use]
    pub fn count_correct(self) -> usize {
        self.states()
            .iter()
            .filter(|&&s| s == LetterState::Correct)
            .count()
    }

    #[must_use]
    pub fn count_present(self) -> usize {
        self.states()
            .iter()
            .filter(|&&s| s == LetterState::Present)
            .count()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::Pattern;
    ///
    /// assert_eq!(Pattern::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.states()
            .iter()
            .map(|state| match state {
                LetterState::Correct => '🟩',
                LetterState::Present => '🟨',
                LetterState::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_correct(), 5);
        assert_eq!(Pattern::PERFECT.count_present(), 0);
    }

    #[test]
    fn pattern_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let answer = Word::new("fghij").unwrap();
        let pattern = Feedback::evaluate(&guess, &answer).pattern();

        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.count_correct(), 0);
    }

    #[test]
    fn pattern_duplicate_letters() {
        // SPEED vs ERASE: present, absent, present, present, absent
        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("erase").unwrap();
        let pattern = Feedback::evaluate(&guess, &answer).pattern();

        assert_eq!(pattern.value(), 37);
        assert_eq!(pattern.count_present(), 3);
    }

    #[test]
    fn pattern_robot_floor() {
        // 1 + 1×3 + 0×9 + 2×27 + 0×81 = 58
        let guess = Word::new("robot").unwrap();
        let answer = Word::new("floor").unwrap();
        assert_eq!(Feedback::evaluate(&guess, &answer).pattern().value(), 58);
    }

    #[test]
    fn states_decode_inverts_encode() {
        // Y G G Y Y = 1 + 2×3 + 2×9 + 1×27 + 1×81 = 133
        let pattern = Pattern::new(133);
        assert_eq!(Pattern::from_states(&pattern.states()), pattern);
        assert_eq!(pattern.count_correct(), 2);
        assert_eq!(pattern.count_present(), 3);
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Pattern::new(0).to_emoji(), "⬜⬜⬜⬜⬜");
        assert_eq!(Pattern::new(37).to_emoji(), "🟨⬜🟨🟨⬜");
    }
}
