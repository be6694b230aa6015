use std::path::PathBuf;

/// Errors raised by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// `guess` or `forfeit` was called on a game that is not running.
    ///
    /// The game is left untouched; callers surface this as "No game running."
    #[error("cannot {operation}: no game running")]
    InvalidOperation { operation: &'static str },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
