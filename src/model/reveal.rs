//! Reveal state of a single letter position.

use serde::{Deserialize, Serialize};

/// One position of the word to guess: either still hidden or revealed.
///
/// Values are never mutated in place. Revealing a position replaces its
/// `RevealState` with a new `Revealed` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealState {
    /// Not guessed yet.
    #[default]
    Hidden,
    /// Guessed (or revealed at game end), holding the character shown.
    Revealed(char),
}

impl RevealState {
    /// The revealed character, if any.
    #[must_use]
    pub const fn character(self) -> Option<char> {
        match self {
            RevealState::Hidden => None,
            RevealState::Revealed(c) => Some(c),
        }
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, RevealState::Hidden)
    }
}
