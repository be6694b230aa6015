//! Line-oriented command shell.
//!
//! Reads commands after a `SP> ` prompt and drives a single [`Game`]:
//!
//! | Command          | Effect                                        |
//! |------------------|-----------------------------------------------|
//! | `NEWGAME [word]` | forfeit any running game, start a new one     |
//! | `GUESS <c>`      | guess one character                           |
//! | `DISPLAY`        | show the saucer and the masked word           |
//! | `FORFEIT`        | give up, revealing the word                   |
//! | `QUIT`           | leave (end of input does the same)            |
//!
//! Command names are case-insensitive. Errors are printed as `Error! <message>`
//! and never end the loop.

mod command;
pub mod render;

pub use command::{Command, CommandError};

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use tracing::debug;

use crate::model::{Game, Outcome};
use crate::words::WordSource;

const PROMPT: &str = "SP> ";

/// The interactive shell. Holds at most one game at a time.
pub struct Shell<S> {
    source: S,
    game: Option<Game>,
}

impl<S: WordSource> Shell<S> {
    /// Create a shell drawing random words from `source`.
    pub fn new(source: S) -> Self {
        Self { source, game: None }
    }

    /// The current game, running or finished.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Read and process commands until `QUIT` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(());
            }

            if self.handle_line(&line, &mut output)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Process one input line. `Break` means the shell should exit.
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> io::Result<ControlFlow<()>> {
        let result = Command::parse(line)
            .map_err(ShellFailure::from)
            .and_then(|command| {
                debug!(?command, "command");
                self.execute(command, out)
            });

        match result {
            Ok(flow) => Ok(flow),
            Err(ShellFailure::Io(err)) => Err(err),
            Err(ShellFailure::Command(err)) => {
                writeln!(out, "Error! {err}")?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<ControlFlow<()>, ShellFailure> {
        match command {
            Command::NewGame(word) => {
                self.terminate_running_game();
                let game = match word {
                    Some(word) => Game::create_with_word(word),
                    None => Game::create(&mut self.source),
                };
                writeln!(out, "{}", render::masked_word(game.state().word().characters()))?;
                self.game = Some(game);
            }
            Command::Guess(argument) => {
                let game = self.running_game()?;
                let mut chars = argument.chars();
                let guessed = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(CommandError::SingleCharacter.into()),
                };

                game.guess(guessed).map_err(CommandError::from)?;
                draw(game, out)?;

                match game.state().outcome() {
                    Some(Outcome::Won) => writeln!(out, "Congratulations, you win!")?,
                    Some(Outcome::Lost) => {
                        let solution = game.solution().unwrap_or_default();
                        writeln!(out, "Game over! The word was {solution}.")?;
                    }
                    None => {}
                }
            }
            Command::Display => {
                let game = self.running_game()?;
                draw(game, out)?;
            }
            Command::Forfeit => {
                let game = self.running_game()?;
                game.forfeit().map_err(CommandError::from)?;
                draw(game, out)?;
            }
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn running_game(&mut self) -> Result<&mut Game, CommandError> {
        self.game
            .as_mut()
            .filter(|game| game.is_running())
            .ok_or(CommandError::NoGameRunning)
    }

    fn terminate_running_game(&mut self) {
        if let Ok(game) = self.running_game() {
            if game.forfeit().is_ok() {
                debug!("forfeited running game for a new one");
            }
        }
    }
}

/// Saucer plus masked word.
fn draw<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    let state = game.state();
    let saucer = render::saucer(state.countdown_value(), state.maximum_countdown_value());
    out.write_all(saucer.as_bytes())?;
    writeln!(out, "{}", render::masked_word(state.word().characters()))
}

/// Either a user-facing error or a broken output stream.
enum ShellFailure {
    Command(CommandError),
    Io(io::Error),
}

impl From<CommandError> for ShellFailure {
    fn from(err: CommandError) -> Self {
        ShellFailure::Command(err)
    }
}

impl From<io::Error> for ShellFailure {
    fn from(err: io::Error) -> Self {
        ShellFailure::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell<impl FnMut() -> String> {
        Shell::new(|| "Alien".to_string())
    }

    fn send<S: WordSource>(shell: &mut Shell<S>, line: &str) -> String {
        let mut out = Vec::new();
        shell.handle_line(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_game_running() {
        let mut shell = shell();

        assert_eq!(send(&mut shell, "GUESS a"), "Error! No game running.\n");
        assert_eq!(send(&mut shell, "DISPLAY"), "Error! No game running.\n");
        assert_eq!(send(&mut shell, "FORFEIT"), "Error! No game running.\n");
    }

    #[test]
    fn test_new_game_prints_masked_word() {
        let mut shell = shell();

        assert_eq!(send(&mut shell, "NEWGAME"), ": _ _ _ _ _ :\n");
        assert_eq!(send(&mut shell, "newgame A B"), ": _   _ :\n");
    }

    #[test]
    fn test_guess_requires_single_character() {
        let mut shell = shell();
        send(&mut shell, "NEWGAME");

        assert_eq!(
            send(&mut shell, "GUESS ab"),
            "Error! You can guess only one character at a time.\n"
        );
        assert_eq!(shell.game().unwrap().state().countdown_value(), 7);
    }

    #[test]
    fn test_new_game_replaces_running_game() {
        let mut shell = shell();
        send(&mut shell, "NEWGAME Moon");
        send(&mut shell, "GUESS x");

        send(&mut shell, "NEWGAME");
        let game = shell.game().unwrap();
        assert!(game.is_running());
        assert_eq!(game.state().countdown_value(), 7);
        assert_eq!(game.state().word().len(), 5);
    }

    #[test]
    fn test_quit_breaks() {
        let mut shell = shell();
        let mut out = Vec::new();

        assert!(shell.handle_line("QUIT", &mut out).unwrap().is_break());
        assert!(shell.handle_line("QUIT now", &mut out).unwrap().is_continue());
    }
}
