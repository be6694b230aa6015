//! Word sources.
//!
//! The engine asks a `WordSource` for a word whenever a game starts without
//! an explicit one. Randomness lives here, behind the trait, so the engine's
//! transitions stay deterministic.
//!
//! - `WordDatabase`: fixed catalog, uniform selection via `GameRng`
//! - any `FnMut() -> String` closure, handy for scripted tests

mod database;

pub use database::WordDatabase;

/// Supplies words for new games.
///
/// Implementations must return a non-empty word. An empty catalog is a
/// configuration error caught when the source is built, not here.
pub trait WordSource {
    /// Produce the next word to guess.
    fn next_word(&mut self) -> String;
}

impl<F> WordSource for F
where
    F: FnMut() -> String,
{
    fn next_word(&mut self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source() {
        let mut words = vec!["Moon", "Comet"].into_iter().cycle();
        let mut source = move || words.next().unwrap_or("Moon").to_string();

        assert_eq!(source.next_word(), "Moon");
        assert_eq!(source.next_word(), "Comet");
        assert_eq!(source.next_word(), "Moon");
    }
}
