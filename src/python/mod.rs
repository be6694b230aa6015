//! Python bindings for the Spaceman engine.
//!
//! # Quick Start
//!
//! ```python
//! import spaceman
//!
//! game = spaceman.Game(word="Alien")
//! game.guess("a")      # True
//! game.guess("z")      # False
//! game.countdown       # 6
//! game.masked          # ['A', None, None, None, None]
//! game.forfeit()
//! game.phase           # 'finished'
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// spaceman: a word-guessing game engine.
#[pymodule]
fn spaceman(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add("COUNTDOWN_START", crate::model::COUNTDOWN_START)?;
    Ok(())
}
