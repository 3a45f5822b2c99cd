//! Game sessions
//!
//! Input buffering, guess validation, and the transitions between states of a
//! single game.

mod error;
mod keyboard;
mod session;

pub use error::{GameError, ValidationError};
pub use keyboard::keyboard_states;
pub use session::{Game, GameStatus, SessionState};
