//! Command parsing for the shell.

use crate::core::GameError;

/// A parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start a new game, with a random word or the given one.
    NewGame(Option<String>),
    /// Guess the argument (validated to a single character later).
    Guess(String),
    /// Show the saucer and the masked word.
    Display,
    /// Give up the running game.
    Forfeit,
    /// Leave the shell.
    Quit,
}

/// Everything the shell reports as `Error! <message>`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command.")]
    UnknownCommand,

    #[error("Wrong number of arguments, expected one")]
    ExpectedOneArgument,

    #[error("Wrong number of arguments, expected zero")]
    ExpectedNoArguments,

    #[error("No game running.")]
    NoGameRunning,

    #[error("You can guess only one character at a time.")]
    SingleCharacter,
}

impl From<GameError> for CommandError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidOperation { .. } => CommandError::NoGameRunning,
        }
    }
}

impl Command {
    /// Parse one input line.
    ///
    /// The command name is everything before the first space and is
    /// case-insensitive. The argument is everything after it, case preserved.
    /// An empty argument counts as none, so a trailing space (`"QUIT "`) is
    /// accepted rather than reported as an extra argument.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (name, argument) = match line.split_once(' ') {
            Some((name, rest)) if !rest.is_empty() => (name, Some(rest)),
            Some((name, _)) => (name, None),
            None => (line, None),
        };

        match name.to_ascii_uppercase().as_str() {
            "NEWGAME" => Ok(Command::NewGame(argument.map(str::to_string))),
            "GUESS" => argument
                .map(|a| Command::Guess(a.to_string()))
                .ok_or(CommandError::ExpectedOneArgument),
            "DISPLAY" => no_argument(argument, Command::Display),
            "FORFEIT" => no_argument(argument, Command::Forfeit),
            "QUIT" => no_argument(argument, Command::Quit),
            _ => Err(CommandError::UnknownCommand),
        }
    }
}

fn no_argument(argument: Option<&str>, command: Command) -> Result<Command, CommandError> {
    match argument {
        None => Ok(command),
        Some(_) => Err(CommandError::ExpectedNoArguments),
    }
}
