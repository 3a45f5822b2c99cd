//! Benchmark command
//!
//! Plays full games against the adversary, opening with a different word each
//! time and following the counter-guess hint afterwards.

use crate::core::Word;
use crate::game::{Game, GameError};
use crate::resolver::best_counter_guess;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count of each won game
    pub distribution: BTreeMap<usize, usize>,
    /// Opener that needed the most guesses
    pub hardest_opener: Option<(Word, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Openers spread evenly across the dictionary
fn pick_openers(words: &[Word], count: usize) -> Vec<Word> {
    if count == 0 || words.is_empty() {
        return Vec::new();
    }

    let step = (words.len() / count).max(1);
    words.iter().step_by(step).take(count).cloned().collect()
}

/// Play up to `count` games and collect statistics
///
/// # Errors
///
/// Returns the first error a game raises, which only happens if the pool
/// invariant breaks.
pub fn run_benchmark<R: Rng>(
    game: &mut Game<'_, R>,
    count: usize,
) -> Result<BenchmarkResult, GameError> {
    let dictionary = game.dictionary();
    let openers = pick_openers(dictionary.words(), count);

    let pb = ProgressBar::new(openers.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut won = 0;
    let mut lost = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut hardest_opener: Option<(Word, usize)> = None;

    for opener in &openers {
        pb.set_message(opener.to_string());

        let fresh = game.reset();
        let mut state = game.submit_word(&fresh, opener.text())?;

        while !state.is_over() {
            let Some((guess, _)) = best_counter_guess(dictionary.words(), state.pool()) else {
                break;
            };
            state = game.submit_word(&state, guess.text())?;
        }

        let guesses = state.history().len();
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);

        if state.is_won() {
            won += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            lost += 1;
        }

        if hardest_opener.as_ref().is_none_or(|(_, most)| guesses > *most) {
            hardest_opener = Some((opener.clone(), guesses));
        }

        tracing::debug!(opener = %opener, guesses, won = state.is_won(), "benchmark game");
        pb.inc(1);
    }

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let total_games = openers.len();

    Ok(BenchmarkResult {
        total_games,
        won,
        lost,
        total_guesses,
        average_guesses: if total_games == 0 {
            0.0
        } else {
            total_guesses as f64 / total_games as f64
        },
        min_guesses: if total_games == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        hardest_opener,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, GameMode};
    use crate::wordlists::WordList;

    fn small_dictionary() -> WordList {
        WordList::from_entries(crate::wordlists::WORDS.iter().take(60).copied()).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let words = small_dictionary();
        let mut game = Game::new(&words, GameConfig::default());

        let result = run_benchmark(&mut game, 5).unwrap();

        assert_eq!(result.total_games, 5);
        assert_eq!(result.won, 5);
        assert_eq!(result.lost, 0);
        assert!(result.min_guesses >= 1);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn distribution_sums_to_wins() {
        let words = small_dictionary();
        let mut game = Game::new(&words, GameConfig::default());

        let result = run_benchmark(&mut game, 8).unwrap();

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.won);
    }

    #[test]
    fn hardest_opener_is_recorded() {
        let words = small_dictionary();
        let mut game = Game::new(&words, GameConfig::default());

        let result = run_benchmark(&mut game, 4).unwrap();

        let (_, most) = result.hardest_opener.unwrap();
        assert_eq!(most, result.max_guesses);
    }

    #[test]
    fn guess_limit_counts_losses() {
        let words = small_dictionary();
        let config = GameConfig::new(GameMode::Adversarial).with_max_guesses(Some(1));
        let mut game = Game::new(&words, config);

        let result = run_benchmark(&mut game, 3).unwrap();

        assert_eq!(result.total_games, 3);
        assert_eq!(result.won + result.lost, 3);
        assert!(result.max_guesses <= 1);
    }

    #[test]
    fn zero_games() {
        let words = small_dictionary();
        let mut game = Game::new(&words, GameConfig::default());

        let result = run_benchmark(&mut game, 0).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn openers_are_spread_out() {
        let words = small_dictionary();
        let openers = pick_openers(words.words(), 6);

        assert_eq!(openers.len(), 6);
        assert_eq!(openers[0], words.words()[0]);
        assert_eq!(openers[1], words.words()[10]);
    }
}
