//! Game configuration
//!
//! Resolved settings for a session, independent of where they came from.

use clap::ValueEnum;

/// Guess limit of the classic game when none is given
pub const CLASSIC_MAX_GUESSES: usize = 6;

/// Which game is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameMode {
    /// No secret word; feedback keeps as many words alive as possible
    #[default]
    Adversarial,
    /// Standard Wordle against a randomly chosen secret
    Classic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Explicit guess limit; `None` uses the mode's default
    pub max_guesses: Option<usize>,
    /// Seed for secret selection in classic mode
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self {
            mode,
            max_guesses: None,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: Option<usize>) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Effective guess limit: unbounded for the adversary unless set
    #[must_use]
    pub const fn guess_limit(&self) -> Option<usize> {
        match (self.max_guesses, self.mode) {
            (Some(limit), _) => Some(limit),
            (None, GameMode::Classic) => Some(CLASSIC_MAX_GUESSES),
            (None, GameMode::Adversarial) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adversarial_is_unbounded_by_default() {
        assert_eq!(GameConfig::default().guess_limit(), None);
    }

    #[test]
    fn classic_defaults_to_six() {
        assert_eq!(GameConfig::new(GameMode::Classic).guess_limit(), Some(6));
    }

    #[test]
    fn explicit_limit_wins() {
        let config = GameConfig::new(GameMode::Adversarial).with_max_guesses(Some(3));
        assert_eq!(config.guess_limit(), Some(3));

        let config = GameConfig::new(GameMode::Classic).with_max_guesses(Some(10));
        assert_eq!(config.guess_limit(), Some(10));
    }
}
