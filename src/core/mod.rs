//! Core domain types for the game
//!
//! Words, per-letter feedback and its compact pattern key, and history records.
//! Everything here is pure and has no I/O.

mod feedback;
mod pattern;
mod record;
mod word;

pub use feedback::{Feedback, LetterResult, LetterState};
pub use pattern::Pattern;
pub use record::GuessRecord;
pub use word::{WORD_LENGTH, Word, WordError};
