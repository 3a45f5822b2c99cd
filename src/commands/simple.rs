//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a word per line, or one of the
//! `:new`, `:hint`, `:quit` commands.

use crate::game::{Game, GameError, GameStatus, SessionState};
use crate::output::formatters::{share_grid, tile_row};
use crate::resolver::best_counter_guess;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(game: &mut Game<'_, R>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, stdin.lock(), stdout.lock())
}

/// Drive a game from `input` until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_lines<R, I, W>(game: &mut Game<'_, R>, input: I, mut out: W) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "ADVERSARIAL WORDLE".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "Type a 5-letter word per line.")?;
    writeln!(out, "Commands: :new for a new game, :hint for a suggestion, :quit to exit\n")?;

    let mut state = game.reset();
    print_prompt(&mut out, &state)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => {}
            ":quit" | ":q" => {
                writeln!(out, "\nThanks for playing!")?;
                return Ok(());
            }
            ":new" | ":n" => {
                state = game.reset();
                writeln!(out, "\n{}", "New game started!".bright_cyan())?;
            }
            ":hint" | ":h" => print_hint(&mut out, game, &state)?,
            word => match game.submit_word(&state, word) {
                Ok(next) => {
                    state = next;
                    print_turn(&mut out, &state)?;
                }
                Err(GameError::Validation(e)) => writeln!(out, "{}", e.to_string().red())?,
                Err(e) => {
                    writeln!(out, "{}", e.to_string().red().bold())?;
                    writeln!(out, "Type :new to start over.")?;
                }
            },
        }

        print_prompt(&mut out, &state)?;
    }

    Ok(())
}

fn print_prompt<W: Write>(out: &mut W, state: &SessionState) -> io::Result<()> {
    if state.is_over() {
        write!(out, "\n(:new or :quit) > ")?;
    } else {
        write!(out, "\nGuess {} > ", state.history().len() + 1)?;
    }
    out.flush()
}

fn print_turn<W: Write>(out: &mut W, state: &SessionState) -> io::Result<()> {
    if let Some(record) = state.history().last() {
        writeln!(out, "  {}", tile_row(record.feedback()))?;
    }

    match state.status() {
        GameStatus::InProgress => {
            let left = state
                .guesses_left()
                .map(|n| format!(", {n} guesses left"))
                .unwrap_or_default();
            writeln!(out, "  {} words remain{left}", state.pool_size())?;
        }
        GameStatus::Won => {
            let turns = state.history().len();
            writeln!(
                out,
                "\n{} Solved in {} {}",
                "🎉".bright_green(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            )?;
            writeln!(out, "{}", share_grid(state.history()))?;
        }
        GameStatus::Lost => {
            let answer = state
                .target()
                .map_or_else(String::new, |word| word.to_string());
            writeln!(
                out,
                "\n{} The word was {}",
                "Out of guesses.".red().bold(),
                answer.bright_yellow().bold()
            )?;
            writeln!(out, "{}", share_grid(state.history()))?;
        }
    }

    Ok(())
}

fn print_hint<R: Rng, W: Write>(
    out: &mut W,
    game: &Game<'_, R>,
    state: &SessionState,
) -> io::Result<()> {
    if state.is_over() {
        return writeln!(out, "The game is over.");
    }

    match best_counter_guess(game.dictionary().words(), state.pool()) {
        Some((guess, worst)) => writeln!(
            out,
            "Try {} (at most {worst} words remain)",
            guess.text().bright_yellow().bold()
        ),
        None => writeln!(out, "No hint available."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn run(words: &WordList, script: &str) -> String {
        let mut game = Game::new(words, GameConfig::default());
        let mut out = Vec::new();
        play_lines(&mut game, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plays_to_a_win() {
        let words = WordList::from_entries(["crane", "crate", "grate"]).unwrap();
        let output = run(&words, "crate\ncrane\n:quit\n");

        assert!(output.contains("1 words remain"));
        assert!(output.contains("Solved in"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn rejects_bad_words() {
        let words = WordList::from_entries(["crane", "crate"]).unwrap();
        let output = run(&words, "cra\nzzzzz\n");

        assert!(output.contains("Not enough letters (3 of 5)"));
        assert!(output.contains("ZZZZZ is not in the word list"));
    }

    #[test]
    fn hint_names_a_word() {
        let words = WordList::from_entries(["crane", "crate", "grate"]).unwrap();
        let output = run(&words, ":hint\n");

        assert!(output.contains("Try"));
        assert!(output.contains("at most 1 words remain"));
    }

    #[test]
    fn new_game_resets() {
        let words = WordList::from_entries(["crane", "crate", "grate"]).unwrap();
        let output = run(&words, "crate\n:new\n");

        assert!(output.contains("New game started!"));
        assert!(output.ends_with("Guess 1 > "));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let words = WordList::from_entries(["crane"]).unwrap();
        let output = run(&words, "");

        assert!(!output.contains("Thanks for playing!"));
    }
}
