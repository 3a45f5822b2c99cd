//! Keyboard highlighting
//!
//! Folds guess history into the best-known state of every letter tried so far,
//! with priority correct > present > absent.

use crate::core::{GuessRecord, LetterState};
use rustc_hash::FxHashMap;

/// Best state observed for each guessed letter
///
/// Letters never guessed are absent from the map.
#[must_use]
pub fn keyboard_states(history: &[GuessRecord]) -> FxHashMap<u8, LetterState> {
    let mut states: FxHashMap<u8, LetterState> = FxHashMap::default();

    for record in history {
        for result in record.feedback() {
            states
                .entry(result.letter)
                .and_modify(|best| *best = (*best).max(result.state))
                .or_insert(result.state);
        }
    }

    states
}
