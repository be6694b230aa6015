//! Fixed word catalog with uniform random selection.

use tracing::debug;

use super::WordSource;
use crate::core::config::validate_words;
use crate::core::{ConfigError, GameRng, SpacemanConfig, DEFAULT_WORDS};

/// All words a game can be started with, chosen uniformly at random.
#[derive(Clone, Debug)]
pub struct WordDatabase {
    words: Vec<String>,
    rng: GameRng,
}

impl WordDatabase {
    /// Create a database over `words`, seeded with `seed`.
    ///
    /// Fails if the catalog is empty or holds a blank word.
    pub fn new<I, S>(words: I, seed: u64) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(words, GameRng::new(seed))
    }

    /// Create a database over `words` seeded from OS entropy.
    pub fn from_entropy<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(words, GameRng::from_entropy())
    }

    /// Build the database described by a configuration.
    pub fn from_config(config: &SpacemanConfig) -> Result<Self, ConfigError> {
        let words = config.words.iter().cloned();
        match config.seed {
            Some(seed) => Self::new(words, seed),
            None => Self::from_entropy(words),
        }
    }

    fn with_rng<I, S>(words: I, rng: GameRng) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        validate_words(&words)?;
        Ok(Self { words, rng })
    }

    /// The catalog.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Seed of the underlying RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for WordDatabase {
    /// The reference catalog, seeded from OS entropy.
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            rng: GameRng::from_entropy(),
        }
    }
}

impl WordSource for WordDatabase {
    fn next_word(&mut self) -> String {
        let index = self.rng.gen_index(self.words.len());
        debug!(index, "drew word from catalog");
        self.words[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let db = WordDatabase::default();
        assert_eq!(db.words(), &["Spaceman", "Alien", "Earthling", "Homo Sapiens"]);
    }

    #[test]
    fn test_words_come_from_catalog() {
        let mut db = WordDatabase::new(DEFAULT_WORDS, 42).unwrap();
        for _ in 0..50 {
            let word = db.next_word();
            assert!(DEFAULT_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_words() {
        let mut db1 = WordDatabase::new(DEFAULT_WORDS, 9).unwrap();
        let mut db2 = WordDatabase::new(DEFAULT_WORDS, 9).unwrap();

        let seq1: Vec<_> = (0..20).map(|_| db1.next_word()).collect();
        let seq2: Vec<_> = (0..20).map(|_| db2.next_word()).collect();
        assert_eq!(seq1, seq2);
    }

    #[test]
    fn test_every_word_is_drawn() {
        let mut db = WordDatabase::new(DEFAULT_WORDS, 1).unwrap();
        let drawn: std::collections::HashSet<_> = (0..400).map(|_| db.next_word()).collect();

        assert_eq!(drawn.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            WordDatabase::new(empty, 0),
            Err(ConfigError::Validation(_))
        ));
        assert!(WordDatabase::new(["Moon", ""], 0).is_err());
    }

    #[test]
    fn test_from_config_uses_seed() {
        let config = SpacemanConfig::default().with_words(["Orbit"]).with_seed(5);
        let mut db = WordDatabase::from_config(&config).unwrap();

        assert_eq!(db.seed(), 5);
        assert_eq!(db.next_word(), "Orbit");
    }
}
