//! Game engine: countdown, word, session, and the `Game` facade.
//!
//! Only `Game` may change a session. The transitions on `GameSession`,
//! `Word` and `Countdown` are `pub(super)`, so the shell, the Python
//! bindings and downstream crates see read-only state.

mod countdown;
mod game;
mod reveal;
mod session;
mod word;

pub use game::{Game, COUNTDOWN_START};
pub use reveal::RevealState;
pub use session::{GameSession, Outcome, Phase, SessionView};
pub use word::Word;
