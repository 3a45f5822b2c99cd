//! Per-letter feedback for a guess
//!
//! Implements Wordle's two-pass scoring: exact matches first, then
//! wrong-position matches against the letters that are still unclaimed.

use super::pattern::Pattern;
use super::word::{WORD_LENGTH, Word};

/// Tri-state verdict for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    /// Letter not available in the reference word
    Absent,
    /// Letter in the word, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterState {
    /// Base-3 digit used by [`Pattern`]
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// One scored letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: u8,
    pub state: LetterState,
}

impl LetterResult {
    #[must_use]
    pub const fn new(letter: u8, state: LetterState) -> Self {
        Self { letter, state }
    }

    /// The letter as a `char`
    #[must_use]
    pub const fn letter_char(self) -> char {
        self.letter as char
    }
}

/// Ordered per-position results for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `reference`
    ///
    /// A reference letter can satisfy at most one guess position, and exact
    /// matches claim their letter before any wrong-position match is considered.
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let reference = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &reference);
    ///
    /// assert_eq!(
    ///     feedback.states(),
    ///     [
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///         LetterState::Present,
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, reference: &Word) -> Self {
        let guess_chars = guess.chars();
        let reference_chars = reference.chars();

        let mut states: [Option<LetterState>; WORD_LENGTH] = [None; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact position matches
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_chars[i] == reference_chars[i] {
                states[i] = Some(LetterState::Correct);
                consumed[i] = true;
            }
        }

        // Second pass: leftmost unclaimed occurrence, otherwise absent
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if states[i].is_some() {
                continue;
            }

            let letter = guess_chars[i];
            let slot = (0..WORD_LENGTH).find(|&j| !consumed[j] && reference_chars[j] == letter);

            states[i] = Some(match slot {
                Some(j) => {
                    consumed[j] = true;
                    LetterState::Present
                }
                None => LetterState::Absent,
            });
        }

        Self(std::array::from_fn(|i| {
            LetterResult::new(
                guess_chars[i],
                states[i].unwrap_or(LetterState::Absent),
            )
        }))
    }

    /// Per-position results
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Per-position states, without letters
    #[must_use]
    pub fn states(&self) -> [LetterState; WORD_LENGTH] {
        self.0.map(|r| r.state)
    }

    /// Compact grouping key for this feedback
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        Pattern::from_states(&self.states())
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|r| r.state == LetterState::Correct)
    }

    /// True when both feedbacks carry the same state at every position
    #[must_use]
    pub fn same_states(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.state == b.state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LetterResult> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
