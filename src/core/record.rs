//! Guess history entries

use super::feedback::Feedback;
use super::pattern::Pattern;
use super::word::Word;

/// A submitted guess together with the feedback it received
///
/// Records are append-only; nothing mutates one after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// Record the feedback `guess` gets against `reference`
    #[must_use]
    pub fn scored(guess: Word, reference: &Word) -> Self {
        let feedback = Feedback::evaluate(&guess, reference);
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn pattern(&self) -> Pattern {
        self.feedback.pattern()
    }
}
