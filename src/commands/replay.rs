//! Replay command
//!
//! Plays a fixed sequence of guesses through a fresh game.

use crate::core::GuessRecord;
use crate::game::{Game, GameError, SessionState};
use rand::Rng;

/// One applied guess
#[derive(Debug, Clone)]
pub struct ReplayStep {
    pub record: GuessRecord,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// Outcome of a replay
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub steps: Vec<ReplayStep>,
    pub final_state: SessionState,
    /// Guesses left unplayed because the game ended first
    pub skipped: usize,
}

/// Start a new game and submit `guesses` in order
///
/// # Errors
///
/// Stops at the first guess the game rejects and returns its error.
pub fn replay_guesses<R: Rng, S: AsRef<str>>(
    game: &mut Game<'_, R>,
    guesses: &[S],
) -> Result<ReplayResult, GameError> {
    let mut state = game.reset();
    let mut steps = Vec::with_capacity(guesses.len());

    for (turn, guess) in guesses.iter().enumerate() {
        if state.is_over() {
            let skipped = guesses.len() - turn;
            tracing::warn!(skipped, "game ended before all guesses were played");
            return Ok(ReplayResult {
                steps,
                final_state: state,
                skipped,
            });
        }

        let pool_before = state.pool_size();
        state = game.submit_word(&state, guess.as_ref())?;

        if let Some(record) = state.history().last() {
            steps.push(ReplayStep {
                record: record.clone(),
                pool_before,
                pool_after: state.pool_size(),
            });
        }
    }

    Ok(ReplayResult {
        steps,
        final_state: state,
        skipped: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{GameStatus, ValidationError};
    use crate::wordlists::WordList;

    #[test]
    fn replay_records_each_step() {
        let words = WordList::from_entries(["crane", "crate", "grate"]).unwrap();
        let mut game = Game::new(&words, GameConfig::default());

        let result = replay_guesses(&mut game, &["crate", "crane"]).unwrap();

        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].pool_before, 3);
        assert_eq!(result.steps[0].pool_after, 1);
        assert_eq!(result.final_state.status(), GameStatus::Won);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn replay_stops_when_game_ends() {
        let words = WordList::from_entries(["crane"]).unwrap();
        let mut game = Game::new(&words, GameConfig::default());

        let result = replay_guesses(&mut game, &["crane", "crane", "crane"]).unwrap();

        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.skipped, 2);
    }

    #[test]
    fn replay_reports_rejected_guess() {
        let words = WordList::from_entries(["crane", "crate"]).unwrap();
        let mut game = Game::new(&words, GameConfig::default());

        let err = replay_guesses(&mut game, &["crate", "xyz"]).unwrap_err();

        assert_eq!(
            err,
            GameError::Validation(ValidationError::IncompleteGuess { len: 3 })
        );
    }

    #[test]
    fn empty_replay_leaves_fresh_game() {
        let words = WordList::embedded().unwrap();
        let mut game = Game::new(&words, GameConfig::default());
        let guesses: [&str; 0] = [];

        let result = replay_guesses(&mut game, &guesses).unwrap();

        assert!(result.steps.is_empty());
        assert_eq!(result.final_state.pool_size(), words.len());
    }
}
