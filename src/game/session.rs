//! Session state machine
//!
//! A [`Game`] owns the rules (dictionary, mode, randomness) and turns one
//! [`SessionState`] into the next. States are values: every transition returns
//! a fresh state and leaves the old one intact, so a renderer can keep drawing a
//! previous snapshot safely.

use super::error::{GameError, ValidationError};
use crate::config::{GameConfig, GameMode};
use crate::core::{GuessRecord, WORD_LENGTH, Word};
use crate::resolver::{AdversarialPolicy, FixedTargetPolicy, PolicyType, ResponsePolicy};
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Snapshot of one game
#[derive(Debug, Clone)]
pub struct SessionState {
    history: Vec<GuessRecord>,
    buffer: String,
    pool: Arc<[Word]>,
    status: GameStatus,
    target: Option<Word>,
    guess_limit: Option<usize>,
    policy: PolicyType,
}

impl SessionState {
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Letters typed for the guess in progress
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Words still consistent with every recorded guess
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// The word the game settled on, once it is over
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// A word the game could still claim was the answer
    #[must_use]
    pub fn representative(&self) -> Option<&Word> {
        self.pool.first()
    }

    /// The committed secret in classic mode
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.policy.secret()
    }

    #[must_use]
    pub const fn guess_limit(&self) -> Option<usize> {
        self.guess_limit
    }

    /// Guesses left before the limit, if there is one
    #[must_use]
    pub fn guesses_left(&self) -> Option<usize> {
        self.guess_limit
            .map(|limit| limit.saturating_sub(self.history.len()))
    }
}

/// Rules of a game and the transitions between its states
pub struct Game<'a, R = StdRng> {
    dictionary: &'a WordList,
    config: GameConfig,
    rng: R,
}

impl<'a> Game<'a> {
    /// Create a game, seeding classic-mode secret selection from the config
    /// or from the OS when no seed is set
    #[must_use]
    pub fn new(dictionary: &'a WordList, config: GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(dictionary, config, rng)
    }
}

impl<'a, R: Rng> Game<'a, R> {
    pub const fn with_rng(dictionary: &'a WordList, config: GameConfig, rng: R) -> Self {
        Self {
            dictionary,
            config,
            rng,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a WordList {
        self.dictionary
    }

    /// Start a fresh game over the whole dictionary
    pub fn reset(&mut self) -> SessionState {
        let policy = match self.config.mode {
            GameMode::Adversarial => PolicyType::Adversarial(AdversarialPolicy),
            GameMode::Classic => {
                match FixedTargetPolicy::random(self.dictionary.words(), &mut self.rng) {
                    Some(policy) => PolicyType::FixedTarget(policy),
                    None => {
                        tracing::warn!("empty dictionary, falling back to adversarial play");
                        PolicyType::Adversarial(AdversarialPolicy)
                    }
                }
            }
        };

        tracing::info!(
            mode = ?self.config.mode,
            words = self.dictionary.len(),
            limit = ?self.config.guess_limit(),
            "new game"
        );

        SessionState {
            history: Vec::new(),
            buffer: String::with_capacity(WORD_LENGTH),
            pool: self.dictionary.words().into(),
            status: GameStatus::InProgress,
            target: None,
            guess_limit: self.config.guess_limit(),
            policy,
        }
    }

    /// Add a letter to the guess in progress
    ///
    /// Ignored when the game is over, the guess is full, or `ch` is not an
    /// ASCII letter.
    #[must_use]
    pub fn append_letter(&self, state: &SessionState, ch: char) -> SessionState {
        if state.is_over() || state.buffer.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return state.clone();
        }

        let mut next = state.clone();
        next.buffer.push(ch.to_ascii_uppercase());
        next
    }

    /// Remove the last letter of the guess in progress, if any
    #[must_use]
    pub fn delete_letter(&self, state: &SessionState) -> SessionState {
        let mut next = state.clone();
        if !state.is_over() {
            next.buffer.pop();
        }
        next
    }

    /// Submit the guess in progress
    ///
    /// Submitting after the game is over changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if the buffer is incomplete or not in the
    /// dictionary, and `GameError::Exhausted` if no candidate survives the
    /// guess. In both cases `state` is untouched and remains current.
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::config::GameConfig;
    /// use adversarial_wordle::game::Game;
    /// use adversarial_wordle::wordlists::WordList;
    ///
    /// let words = WordList::from_entries(["crane", "crate", "grate"]).unwrap();
    /// let mut game = Game::new(&words, GameConfig::default());
    ///
    /// let mut state = game.reset();
    /// for ch in "crate".chars() {
    ///     state = game.append_letter(&state, ch);
    /// }
    /// let state = game.submit_guess(&state).unwrap();
    ///
    /// assert!(!state.is_won());
    /// assert_eq!(state.pool_size(), 1);
    /// ```
    pub fn submit_guess(&self, state: &SessionState) -> Result<SessionState, GameError> {
        if state.is_over() {
            return Ok(state.clone());
        }

        let guess = self.validate(&state.buffer)?;
        self.resolve(state, guess)
    }

    /// Type `text` into an empty buffer and submit it
    ///
    /// # Errors
    ///
    /// Same as [`Game::submit_guess`].
    pub fn submit_word(&self, state: &SessionState, text: &str) -> Result<SessionState, GameError> {
        if state.is_over() {
            return Ok(state.clone());
        }

        let guess = self.validate(&text.trim().to_ascii_uppercase())?;
        self.resolve(state, guess)
    }

    fn validate(&self, text: &str) -> Result<Word, ValidationError> {
        if text.len() != WORD_LENGTH {
            tracing::debug!(buffer = text, "rejected incomplete guess");
            return Err(ValidationError::IncompleteGuess { len: text.len() });
        }

        self.dictionary.get(text).cloned().ok_or_else(|| {
            tracing::debug!(buffer = text, "rejected unknown word");
            ValidationError::UnknownWord(text.to_string())
        })
    }

    fn resolve(&self, state: &SessionState, guess: Word) -> Result<SessionState, GameError> {
        let Some(response) = state.policy.respond(&guess, &state.pool) else {
            tracing::error!(
                guess = %guess,
                pool = state.pool.len(),
                "candidate pool exhausted"
            );
            return Err(GameError::Exhausted { guess });
        };

        let won = response.feedback.is_all_correct();

        tracing::debug!(
            guess = %guess,
            feedback = %response.feedback.pattern().to_emoji(),
            before = state.pool.len(),
            after = response.remaining.len(),
            "guess resolved"
        );

        let mut history = state.history.clone();
        history.push(GuessRecord::new(guess, response.feedback));

        let pool: Arc<[Word]> = response.remaining.into();
        let limit_reached = state
            .guess_limit
            .is_some_and(|limit| history.len() >= limit);

        let (status, target) = if won {
            (GameStatus::Won, pool.first().cloned())
        } else if limit_reached {
            let reveal = state.policy.secret().or_else(|| pool.first()).cloned();
            (GameStatus::Lost, reveal)
        } else {
            (GameStatus::InProgress, None)
        };

        if let Some(word) = &target {
            tracing::info!(
                outcome = ?status,
                guesses = history.len(),
                word = %word,
                "game over"
            );
        }

        Ok(SessionState {
            history,
            buffer: String::with_capacity(WORD_LENGTH),
            pool,
            status,
            target,
            guess_limit: state.guess_limit,
            policy: state.policy.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::is_consistent;

    fn dictionary(list: &[&str]) -> WordList {
        WordList::from_entries(list.iter().copied()).unwrap()
    }

    fn type_word<R: Rng>(game: &Game<'_, R>, state: &SessionState, text: &str) -> SessionState {
        text.chars()
            .fold(state.clone(), |s, ch| game.append_letter(&s, ch))
    }

    #[test]
    fn reset_starts_with_full_pool() {
        let words = dictionary(&["crane", "crate", "grate"]);
        let mut game = Game::new(&words, GameConfig::default());
        let state = game.reset();

        assert_eq!(state.pool(), words.words());
        assert!(state.history().is_empty());
        assert!(state.buffer().is_empty());
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.guess_limit(), None);
        assert!(state.secret().is_none());
    }

    #[test]
    fn append_normalizes_and_stops_at_five() {
        let words = dictionary(&["crane"]);
        let mut game = Game::new(&words, GameConfig::default());
        let state = game.reset();

        let state = type_word(&game, &state, "craneX");
        assert_eq!(state.buffer(), "CRANE");

        let state = game.append_letter(&game.delete_letter(&state), '1');
        assert_eq!(state.buffer(), "CRAN");
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let words = dictionary(&["crane"]);
        let mut game = Game::new(&words, GameConfig::default());
        let state = game.reset();

        let state = game.delete_letter(&state);
        assert!(state.buffer().is_empty());
    }

    #[test]
    fn incomplete_guess_is_rejected() {
        let words = dictionary(&["crane"]);
        let mut game = Game::new(&words, GameConfig::default());
        let state = game.reset();
        let state = type_word(&game, &state, "cra");

        let err = game.submit_guess(&state).unwrap_err();

        assert_eq!(
            err,
            GameError::Validation(ValidationError::IncompleteGuess { len: 3 })
        );
        assert!(err.is_validation());
        assert_eq!(state.buffer(), "CRA");
    }

    #[test]
    fn unknown_word_is_rejected() {
        let words = dictionary(&["crane"]);
        let mut game = Game::new(&words, GameConfig::default());
        let state = game.reset();
        let state = type_word(&game, &state, "zzzzz");

        let err = game.submit_guess(&state).unwrap_err();

        assert_eq!(
            err,
            GameError::Validation(ValidationError::UnknownWord("ZZZZZ".to_string()))
        );
        assert_eq!(err.to_string(), "ZZZZZ is not in the word list");
    }

    #[test]
    fn adversary_dodges_then_concedes() {
        let words = dictionary(&["crane", "crate", "grate"]);
        let mut game = Game::new(&words, GameConfig::default());
        let state = game.reset();

        let state = game.submit_guess(&type_word(&game, &state, "crate")).unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.history()[0].feedback().is_all_correct());
        assert_eq!(state.pool(), &[Word::new("crane").unwrap()]);
        assert!(state.buffer().is_empty());

        let state = game.submit_word(&state, "crane").unwrap();
        assert!(state.is_won());
        assert!(state.is_over());
        assert_eq!(state.target().map(Word::text), Some("CRANE"));
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn terminal_state_ignores_input() {
        let words = dictionary(&["crane"]);
        let mut game = Game::new(&words, GameConfig::default());
        let state = game.reset();
        let won = game.submit_word(&state, "crane").unwrap();
        assert!(won.is_won());

        let after = game.append_letter(&won, 'a');
        assert!(after.buffer().is_empty());

        let resubmitted = game.submit_word(&won, "crane").unwrap();
        assert_eq!(resubmitted.history().len(), 1);
    }

    #[test]
    fn pool_shrinks_and_stays_consistent() {
        let words = WordList::embedded().unwrap();
        let mut game = Game::new(&words, GameConfig::default());
        let mut state = game.reset();
        let mut previous = state.pool_size();

        for guess in ["crane", "sloth", "pudgy", "wimpy"] {
            if state.is_over() {
                break;
            }
            state = game.submit_word(&state, guess).unwrap();

            assert!(state.pool_size() <= previous);
            assert!(state.pool_size() > 0);
            assert!(
                state
                    .pool()
                    .iter()
                    .all(|word| is_consistent(word, state.history()))
            );
            previous = state.pool_size();
        }
    }

    #[test]
    fn old_snapshots_survive_transitions() {
        let words = dictionary(&["crane", "crate", "grate"]);
        let mut game = Game::new(&words, GameConfig::default());
        let before = game.reset();

        let after = game.submit_word(&before, "crate").unwrap();

        assert_eq!(before.pool_size(), 3);
        assert!(before.history().is_empty());
        assert_eq!(after.pool_size(), 1);
    }

    #[test]
    fn limit_ends_adversarial_game() {
        let words = dictionary(&["crane", "crate", "grate"]);
        let config = GameConfig::default().with_max_guesses(Some(1));
        let mut game = Game::new(&words, config);

        let state = game.reset();
        let state = game.submit_word(&state, "crate").unwrap();

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.target().map(Word::text), Some("CRANE"));
        assert_eq!(state.guesses_left(), Some(0));
    }

    #[test]
    fn classic_mode_wins_on_secret() {
        let words = dictionary(&["crane", "slate", "irate"]);
        let config = GameConfig::new(GameMode::Classic).with_seed(Some(3));
        let mut game = Game::new(&words, config);
        let state = game.reset();

        let secret = state.secret().cloned().unwrap();
        assert_eq!(state.guess_limit(), Some(6));

        let state = game.submit_word(&state, secret.text()).unwrap();
        assert!(state.is_won());
        assert_eq!(state.target(), Some(&secret));
    }

    #[test]
    fn classic_mode_loses_and_reveals_secret() {
        let words = dictionary(&["crane", "slate"]);
        let config = GameConfig::new(GameMode::Classic).with_max_guesses(Some(1));
        let mut game = Game::with_rng(&words, config, StdRng::seed_from_u64(11));
        let state = game.reset();

        let secret = state.secret().cloned().unwrap();
        let decoy = words.words().iter().find(|w| **w != secret).unwrap();

        let state = game.submit_word(&state, decoy.text()).unwrap();
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.target(), Some(&secret));
        assert_eq!(state.pool(), &[secret]);
    }

    #[test]
    fn same_seed_same_secret() {
        let words = WordList::embedded().unwrap();
        let config = GameConfig::new(GameMode::Classic).with_seed(Some(99));

        let first = Game::new(&words, config).reset();
        let second = Game::new(&words, config).reset();

        assert_eq!(first.secret(), second.secret());
    }
}
