//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, LetterState, WORD_LENGTH};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and info
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("😈 ADVERSARIAL WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => Color::Green,
        LetterState::Present => Color::Yellow,
        LetterState::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn scored_row(feedback: &Feedback) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for result in feedback {
        spans.push(tile(result.letter_char(), state_color(result.state)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn input_row(buffer: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut letters = buffer.chars();
    for _ in 0..WORD_LENGTH {
        let letter = letters.next().unwrap_or('_');
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.state.history();
    // Rows that fit inside the border, one blank line between guesses
    let capacity = usize::from(area.height.saturating_sub(2)).div_ceil(2).max(1);
    let input_rows = usize::from(!app.state.is_over());
    let skip = (history.len() + input_rows).saturating_sub(capacity);

    let mut lines = Vec::new();
    for record in history.iter().skip(skip) {
        lines.push(scored_row(record.feedback()));
        lines.push(Line::from(""));
    }
    if !app.state.is_over() {
        lines.push(input_row(app.state.buffer()));
    }

    let title = match app.state.guess_limit() {
        Some(limit) => format!(" Guess {} of {limit} ", (history.len() + 1).min(limit)),
        None => format!(" Guess {} ", history.len() + 1),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pool gauge
            Constraint::Length(4), // Hint
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_pool(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_pool(f: &mut Frame, app: &App, area: Rect) {
    let total = app.dictionary_size().max(1);
    let remaining = app.state.pool_size();
    let eliminated = total.saturating_sub(remaining);
    let percent = (eliminated * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!("{remaining} of {total} words remain"));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.hint, app.state.status()) {
        (_, GameStatus::Won) => vec![Line::from(Span::styled(
            "Solved!",
            Style::default().fg(Color::Green),
        ))],
        (_, GameStatus::Lost) => {
            let answer = app
                .state
                .target()
                .map_or_else(String::new, ToString::to_string);
            vec![Line::from(vec![
                Span::raw("The word was "),
                Span::styled(
                    answer,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])]
        }
        (Some(hint), GameStatus::InProgress) => vec![
            Line::from(vec![
                Span::raw("Try: "),
                Span::styled(
                    hint.word.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Worst case: {} words", hint.worst_case)),
        ],
        (None, GameStatus::InProgress) => vec![Line::from(Span::styled(
            "Press Tab for a hint",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn keyboard_line(row: &str, states: &FxHashMap<u8, LetterState>) -> Line<'static> {
    let spans: Vec<Span> = row
        .bytes()
        .flat_map(|letter| {
            let key = match states.get(&letter) {
                Some(&state) => tile(char::from(letter), state_color(state)),
                None => Span::styled(
                    format!(" {} ", char::from(letter)),
                    Style::default().fg(Color::White),
                ),
            };
            [key, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| keyboard_line(row, &states))
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} ({:.0}%)",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Tab: Hint | Ctrl-N: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
