//! Adversarial Wordle
//!
//! A Wordle variant with no secret word. Every guess is answered with the
//! feedback that keeps the most dictionary words alive, so the game only ends
//! once the player has cornered it into a single word.
//!
//! # Quick Start
//!
//! ```rust
//! use adversarial_wordle::config::GameConfig;
//! use adversarial_wordle::game::Game;
//! use adversarial_wordle::wordlists::WordList;
//!
//! let words = WordList::embedded().unwrap();
//! let mut game = Game::new(&words, GameConfig::default());
//!
//! let state = game.reset();
//! let state = game.submit_word(&state, "crane").unwrap();
//!
//! println!("{} words remain", state.pool_size());
//! assert!(state.pool_size() < words.len());
//! ```

// Core domain types
pub mod core;

// Feedback partitioning and response policies
pub mod resolver;

// Session state machine
pub mod game;

// Game settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
