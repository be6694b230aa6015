//! Game bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::DEFAULT_WORDS;
use crate::model::{Game, Outcome, Phase};
use crate::words::WordDatabase;

/// Python wrapper for Game.
///
/// Starting a new game means constructing a new `Game` object.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - word: Word to guess. Drawn from the built-in catalog if omitted.
    /// - seed: RNG seed for the catalog draw. OS entropy if omitted.
    #[new]
    #[pyo3(signature = (word = None, seed = None))]
    fn new(word: Option<String>, seed: Option<u64>) -> PyResult<Self> {
        let game = match (word, seed) {
            (Some(word), _) => Game::create_with_word(word),
            (None, Some(seed)) => {
                let mut words = WordDatabase::new(DEFAULT_WORDS, seed)
                    .map_err(|e| PyValueError::new_err(e.to_string()))?;
                Game::create(&mut words)
            }
            (None, None) => Game::create(&mut WordDatabase::default()),
        };
        Ok(Self { game })
    }

    /// Guess a character. Returns whether it is in the word.
    ///
    /// Raises RuntimeError if the game is already finished.
    fn guess(&mut self, character: char) -> PyResult<bool> {
        self.game
            .guess(character)
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Give up, revealing the word.
    ///
    /// Raises RuntimeError if the game is already finished.
    fn forfeit(&mut self) -> PyResult<()> {
        self.game
            .forfeit()
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// "running" or "finished".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.game.state().phase() {
            Phase::Running => "running",
            Phase::Finished => "finished",
        }
    }

    /// "won", "lost", or None while running.
    #[getter]
    fn outcome(&self) -> Option<&'static str> {
        self.game.state().outcome().map(|outcome| match outcome {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        })
    }

    #[getter]
    fn is_running(&self) -> bool {
        self.game.is_running()
    }

    /// Remaining wrong guesses.
    #[getter]
    fn countdown(&self) -> u32 {
        self.game.state().countdown_value()
    }

    #[getter]
    fn max_countdown(&self) -> u32 {
        self.game.state().maximum_countdown_value()
    }

    /// One entry per position: the character if revealed, None if hidden.
    #[getter]
    fn masked(&self) -> Vec<Option<char>> {
        self.game
            .state()
            .word()
            .characters()
            .iter()
            .map(|c| c.character())
            .collect()
    }

    fn __repr__(&self) -> String {
        let state = self.game.state();
        format!(
            "Game(phase={}, countdown={}/{}, word='{}')",
            self.phase(),
            state.countdown_value(),
            state.maximum_countdown_value(),
            crate::shell::render::masked_word(state.word().characters())
        )
    }
}
