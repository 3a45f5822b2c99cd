//! TUI application state and logic

use crate::core::{LetterState, Word};
use crate::game::{Game, GameError, GameStatus, SessionState, keyboard_states};
use crate::resolver::best_counter_guess;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub state: SessionState,
    pub hint: Option<Hint>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Counter-guess suggestion for the current pool
#[derive(Debug, Clone)]
pub struct Hint {
    pub word: Word,
    pub worst_case: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Guess count of each won game
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    fn record(&mut self, state: &SessionState) {
        self.total_games += 1;
        if state.is_won() {
            self.games_won += 1;
            *self
                .guess_distribution
                .entry(state.history().len())
                .or_insert(0) += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(mut game: Game<'a>) -> Self {
        let state = game.reset();

        let mut app = Self {
            game,
            state,
            hint: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Guess the word. Every answer is chosen to keep you guessing.",
            MessageStyle::Info,
        );
        app.add_message("Tab for a hint, Ctrl-N for a new game.", MessageStyle::Info);
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Tab => self.request_hint(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.state = self.game.delete_letter(&self.state),
            KeyCode::Char(c) if !ctrl => self.state = self.game.append_letter(&self.state, c),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        if self.state.is_over() {
            self.add_message("Game over. Ctrl-N starts a new one.", MessageStyle::Info);
            return;
        }

        match self.game.submit_guess(&self.state) {
            Ok(next) => {
                self.state = next;
                self.hint = None;
                self.announce_turn();
            }
            Err(GameError::Validation(e)) => self.add_message(&e.to_string(), MessageStyle::Error),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.add_message("Ctrl-N starts over.", MessageStyle::Info);
            }
        }
    }

    fn announce_turn(&mut self) {
        match self.state.status() {
            GameStatus::InProgress => {
                let text = format!("{} words remain", self.state.pool_size());
                self.add_message(&text, MessageStyle::Info);
            }
            GameStatus::Won => {
                self.stats.record(&self.state);
                let guesses = self.state.history().len();
                let text = format!(
                    "🎉 Cornered it in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                );
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Ctrl-N for a new game, Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record(&self.state);
                let answer = self
                    .state
                    .target()
                    .map_or_else(String::new, ToString::to_string);
                self.add_message(
                    &format!("Out of guesses. The word was {answer}."),
                    MessageStyle::Error,
                );
                self.add_message("Ctrl-N for a new game, Esc to quit.", MessageStyle::Info);
            }
        }
    }

    /// Compute the counter-guess for the current pool
    pub fn request_hint(&mut self) {
        if self.state.is_over() {
            return;
        }

        match best_counter_guess(self.game.dictionary().words(), self.state.pool()) {
            Some((word, worst_case)) => {
                let text = format!("Hint: {word} leaves at most {worst_case}");
                self.hint = Some(Hint {
                    word: word.clone(),
                    worst_case,
                });
                self.add_message(&text, MessageStyle::Info);
            }
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.state = self.game.reset();
        self.hint = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Best-known state of every guessed letter
    #[must_use]
    pub fn keyboard(&self) -> FxHashMap<u8, LetterState> {
        keyboard_states(self.state.history())
    }

    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.game.dictionary().len()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
