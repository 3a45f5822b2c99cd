//! Game errors

use crate::core::{WORD_LENGTH, Word};
use thiserror::Error;

/// A submission the game refuses; the session is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Not enough letters ({len} of {WORD_LENGTH})", WORD_LENGTH = WORD_LENGTH)]
    IncompleteGuess { len: usize },
    #[error("{0} is not in the word list")]
    UnknownWord(String),
}

/// Anything that stops a guess from being applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The candidate pool emptied; the pool invariant no longer holds
    #[error("no candidate words remain after guessing {guess}")]
    Exhausted { guess: Word },
}

impl GameError {
    /// True for errors the player caused and can correct
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
