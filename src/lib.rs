//! # spaceman
//!
//! A single-player word-guessing game. A hidden word is revealed letter by
//! letter as the player guesses characters; every wrong guess brings the
//! flying saucer closer, and seven of them lose the game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Core**: The engine never touches randomness or I/O.
//!    Random words come from an injected `WordSource`.
//!
//! 2. **Facade-Only Mutation**: Sessions, words and countdowns expose
//!    read-only state. Only `Game` can drive their transitions.
//!
//! 3. **Errors, Not Silence**: Guessing or forfeiting a finished game returns
//!    `GameError::InvalidOperation` and leaves the game untouched.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, error types
//! - `model`: Countdown, reveal states, word, session, and the `Game` facade
//! - `words`: Word sources (fixed catalog with seeded selection)
//! - `shell`: Line-oriented command shell and text rendering
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod model;
pub mod shell;
pub mod words;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameError, GameRng, SpacemanConfig, DEFAULT_WORDS};

pub use crate::model::{
    Game, GameSession, Outcome, Phase, RevealState, SessionView, Word, COUNTDOWN_START,
};

pub use crate::shell::{Command, CommandError, Shell};

pub use crate::words::{WordDatabase, WordSource};
