//! The game facade: creation plus the guess/forfeit protocol.

use tracing::{debug, info};

use super::session::{GameSession, Outcome, Phase};
use crate::core::GameError;
use crate::words::WordSource;

/// Value the game countdown is started with.
pub const COUNTDOWN_START: u32 = 7;

/// A Spaceman game.
///
/// Owns exactly one session. Starting a new game means building a new
/// `Game`; nothing of the previous one is kept.
///
/// ```
/// use spaceman::{Game, Phase};
///
/// let mut game = Game::create_with_word("Alien");
/// assert!(game.guess('a').unwrap());
/// assert!(!game.guess('z').unwrap());
/// assert_eq!(game.state().countdown_value(), 6);
///
/// game.forfeit().unwrap();
/// assert_eq!(game.state().phase(), Phase::Finished);
/// assert!(game.guess('l').is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    state: GameSession,
}

impl Game {
    /// Start a game with a word drawn from `source`.
    pub fn create<S: WordSource + ?Sized>(source: &mut S) -> Self {
        Self::create_with_word(source.next_word())
    }

    /// Start a game with the given word.
    pub fn create_with_word(word: impl Into<String>) -> Self {
        Self::with_budget(word, COUNTDOWN_START)
    }

    /// Start a game with the given word and wrong-guess budget.
    ///
    /// # Panics
    ///
    /// Panics if `budget` is zero.
    pub fn with_budget(word: impl Into<String>, budget: u32) -> Self {
        assert!(budget > 0, "Countdown budget must be positive");
        let state = GameSession::new(word, budget);
        info!(
            positions = state.word().len(),
            hidden = state.word().hidden_count(),
            budget,
            "new game"
        );
        Self { state }
    }

    /// Current state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameSession {
        &self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.phase() == Phase::Running
    }

    /// Guess a character.
    ///
    /// Matching ignores case: if the word contains the lower- or upper-case
    /// form of `guessed`, both forms are revealed everywhere and `true` is
    /// returned. Revealing the last hidden position wins the game.
    ///
    /// Otherwise the countdown decreases by one and `false` is returned.
    /// Exhausting the countdown reveals the word and loses the game.
    ///
    /// Fails with [`GameError::InvalidOperation`] if the game is not running;
    /// the state is then left untouched.
    pub fn guess(&mut self, guessed: char) -> Result<bool, GameError> {
        self.ensure_running("guess")?;

        let (lower, upper) = case_forms(guessed);
        let word = self.state.word_mut();
        let hit = word.contains(lower) || word.contains(upper);

        if hit {
            word.guess(lower);
            word.guess(upper);
            let revealed = word.is_revealed();
            debug!(%guessed, hit, "guess");
            if revealed {
                self.end_game();
            }
        } else {
            let remaining = self.state.decrease_countdown();
            debug!(%guessed, hit, remaining, "guess");
            if remaining == 0 {
                self.state.word_mut().reveal_all();
                self.end_game();
            }
        }

        Ok(hit)
    }

    /// Forfeit the game: reveal the word, zero the countdown, finish.
    ///
    /// Fails with [`GameError::InvalidOperation`] if the game is not running.
    pub fn forfeit(&mut self) -> Result<(), GameError> {
        self.ensure_running("forfeit")?;

        self.state.word_mut().reveal_all();
        self.state.set_countdown_to_zero();
        self.end_game();
        Ok(())
    }

    /// The answer, once the game has finished.
    #[must_use]
    pub fn solution(&self) -> Option<&str> {
        match self.state.phase() {
            Phase::Running => None,
            Phase::Finished => Some(self.state.word().complete_word()),
        }
    }

    fn ensure_running(&self, operation: &'static str) -> Result<(), GameError> {
        match self.state.phase() {
            Phase::Running => Ok(()),
            Phase::Finished => Err(GameError::InvalidOperation { operation }),
        }
    }

    fn end_game(&mut self) {
        self.state.finish();
        let outcome = self.state.outcome();
        info!(?outcome, remaining = self.state.countdown_value(), "game finished");
        debug_assert!(
            outcome != Some(Outcome::Lost) || self.state.word().is_revealed(),
            "a lost game must be fully revealed"
        );
    }
}

/// Lower- and upper-case forms of `c`, using single-character mappings.
///
/// 'İ' is the only character whose lower-case form expands; its first
/// character 'i' is used. Characters whose upper-case form expands (such as
/// 'ß' upper-casing to "SS") keep their own form on that side.
fn case_forms(c: char) -> (char, char) {
    (
        c.to_lowercase().next().unwrap_or(c),
        single(c.to_uppercase()).unwrap_or(c),
    )
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    match chars.next() {
        Some(_) => None,
        None => Some(first),
    }
}
