//! State of a single game session.

use serde::{Deserialize, Serialize};

use super::countdown::Countdown;
use super::reveal::RevealState;
use super::word::Word;

/// Lifecycle of a session. `Running` moves to `Finished` once and never back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Finished,
}

/// How a finished session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every position was guessed.
    Won,
    /// The countdown ran out, or the player forfeited.
    Lost,
}

/// Current state of a game: phase, word, and countdown.
///
/// Read access is public. The transitions are visible to the `model` module
/// only, so nothing outside the `Game` facade can drive them.
#[derive(Clone, Debug)]
pub struct GameSession {
    phase: Phase,
    word: Word,
    countdown: Countdown,
    initial_countdown: u32,
}

impl GameSession {
    pub(super) fn new(word: impl Into<String>, countdown: u32) -> Self {
        Self {
            phase: Phase::Running,
            word: Word::new(word),
            countdown: Countdown::new(countdown),
            initial_countdown: countdown,
        }
    }

    // === Transitions ===

    pub(super) fn finish(&mut self) {
        self.phase = Phase::Finished;
    }

    pub(super) fn set_countdown_to_zero(&mut self) {
        self.countdown.set_to_zero();
    }

    pub(super) fn decrease_countdown(&mut self) -> u32 {
        self.countdown.decrease()
    }

    pub(super) fn word_mut(&mut self) -> &mut Word {
        &mut self.word
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Remaining wrong guesses.
    #[must_use]
    pub fn countdown_value(&self) -> u32 {
        self.countdown.current_value()
    }

    /// The budget the countdown started with.
    #[must_use]
    pub fn maximum_countdown_value(&self) -> u32 {
        self.initial_countdown
    }

    /// How the session ended, or `None` while it is running.
    ///
    /// A win never touches the countdown and a loss always leaves it at zero,
    /// so the countdown alone tells the two apart.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Running => None,
            Phase::Finished if self.countdown.is_exhausted() => Some(Outcome::Lost),
            Phase::Finished => Some(Outcome::Won),
        }
    }

    /// Snapshot for rendering or serialization.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            outcome: self.outcome(),
            countdown: self.countdown_value(),
            maximum_countdown: self.initial_countdown,
            characters: self.word.characters().to_vec(),
        }
    }
}

/// Serializable snapshot of what a player may see.
///
/// Holds the masked characters, never the answer itself; after the game ends
/// the characters are fully revealed anyway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub countdown: u32,
    pub maximum_countdown: u32,
    pub characters: Vec<RevealState>,
}
