//! Game configuration.
//!
//! The binary loads a `SpacemanConfig` from TOML at startup:
//!
//! ```toml
//! seed = 42
//! words = ["Spaceman", "Alien", "Earthling", "Homo Sapiens"]
//! ```
//!
//! Every field is optional; missing fields fall back to the defaults.
//! The countdown budget is deliberately not part of the configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// The reference word catalog.
pub const DEFAULT_WORDS: [&str; 4] = ["Spaceman", "Alien", "Earthling", "Homo Sapiens"];

/// Top-level configuration, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacemanConfig {
    /// Catalog the word source draws from.
    pub words: Vec<String>,

    /// Seed for word selection. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SpacemanConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            seed: None,
        }
    }
}

impl SpacemanConfig {
    /// Replace the word catalog.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SpacemanConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_words(&self.words)
    }
}

/// Check that a catalog can back a word source.
pub(crate) fn validate_words(words: &[String]) -> Result<(), ConfigError> {
    if words.is_empty() {
        return Err(ConfigError::Validation("words must not be empty".into()));
    }
    if let Some(index) = words.iter().position(|w| w.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "words[{index}] must contain at least one non-space character"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpacemanConfig::default();
        assert_eq!(config.words, vec!["Spaceman", "Alien", "Earthling", "Homo Sapiens"]);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SpacemanConfig::default()
            .with_words(["Comet", "Nebula"])
            .with_seed(123);

        assert_eq!(config.words, vec!["Comet", "Nebula"]);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = SpacemanConfig::from_toml("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.words.len(), 4);

        let config = SpacemanConfig::from_toml(r#"words = ["Orbit"]"#).unwrap();
        assert_eq!(config.words, vec!["Orbit"]);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_toml_rejects_empty_catalog() {
        let err = SpacemanConfig::from_toml("words = []").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_from_toml_rejects_blank_word() {
        let err = SpacemanConfig::from_toml(r#"words = ["Moon", "  "]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: words[1] must contain at least one non-space character"
        );
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = SpacemanConfig::from_toml("words = 5").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("definitely/not/here/spaceman.toml");
        assert!(matches!(
            SpacemanConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(
            SpacemanConfig::load_or_default(path).unwrap(),
            SpacemanConfig::default()
        );
    }
}
