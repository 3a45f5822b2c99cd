//! Formatting utilities for terminal output

use crate::core::{Feedback, GuessRecord, LetterState};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, state: LetterState) -> ColoredString {
    let tile = format!(" {letter} ");
    match state {
        LetterState::Correct => tile.black().on_green().bold(),
        LetterState::Present => tile.black().on_yellow().bold(),
        LetterState::Absent => tile.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn tile_row(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|result| letter_tile(result.letter_char(), result.state).to_string())
        .collect()
}

/// Emoji grid of a game, one row per guess, for sharing
///
/// # Examples
/// ```
/// use adversarial_wordle::core::{GuessRecord, Word};
/// use adversarial_wordle::output::formatters::share_grid;
///
/// let history = [GuessRecord::scored(
///     Word::new("crane").unwrap(),
///     &Word::new("crane").unwrap(),
/// )];
/// assert_eq!(share_grid(&history), "🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| record.pattern().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn record(guess: &str, reference: &str) -> GuessRecord {
        GuessRecord::scored(Word::new(guess).unwrap(), &Word::new(reference).unwrap())
    }

    #[test]
    fn share_grid_one_row_per_guess() {
        let history = [record("speed", "erase"), record("erase", "erase")];
        assert_eq!(share_grid(&history), "🟨⬜🟨🟨⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty_history() {
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn tile_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let row = tile_row(record("crane", "slate").feedback());
        assert_eq!(row, " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
