//! Ambient building blocks: RNG, configuration, errors.
//!
//! Nothing here knows the rules of the game; the `model` module does.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SpacemanConfig, DEFAULT_WORDS};
pub use error::{ConfigError, GameError};
pub use rng::GameRng;
