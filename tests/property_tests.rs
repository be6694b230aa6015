//! Property tests for the game protocol.

use proptest::prelude::*;

use spaceman::{Game, GameError, Outcome, Phase, RevealState};

fn ascii_word() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,16}"
}

proptest! {
    /// Spaces start revealed, everything else starts hidden.
    #[test]
    fn prop_construction_reveals_only_spaces(word in "\\PC{0,24}") {
        let game = Game::create_with_word(word.clone());
        let characters = game.state().word().characters();

        prop_assert_eq!(characters.len(), word.chars().count());
        for (state, actual) in characters.iter().zip(word.chars()) {
            if actual == ' ' {
                prop_assert_eq!(*state, RevealState::Revealed(' '));
            } else {
                prop_assert_eq!(*state, RevealState::Hidden);
            }
        }
    }

    /// A letter in the word, in either case, is a hit and costs nothing.
    #[test]
    fn prop_present_guess_hits(
        word in ascii_word().prop_filter("needs a letter", |w| !w.trim().is_empty()),
        pick in any::<prop::sample::Index>(),
        upper in any::<bool>(),
    ) {
        let letters: Vec<char> = word.chars().filter(|c| *c != ' ').collect();
        let letter = *pick.get(&letters);
        let guessed = if upper { letter.to_ascii_uppercase() } else { letter.to_ascii_lowercase() };

        let mut game = Game::create_with_word(word.clone());
        prop_assert!(game.guess(guessed).unwrap());
        prop_assert_eq!(game.state().countdown_value(), 7);

        for (state, actual) in game.state().word().characters().iter().zip(word.chars()) {
            if actual.eq_ignore_ascii_case(&letter) {
                prop_assert_eq!(*state, RevealState::Revealed(actual));
            }
        }
    }

    /// A letter absent from the word is a miss costing exactly one.
    #[test]
    fn prop_absent_guess_misses(word in "[a-mA-M ]{1,16}", guessed in "[n-zN-Z]") {
        let guessed = guessed.chars().next().unwrap();
        let mut game = Game::create_with_word(word);
        let hidden_before = game.state().word().hidden_count();

        prop_assert!(!game.guess(guessed).unwrap());
        prop_assert_eq!(game.state().countdown_value(), 6);
        prop_assert_eq!(game.state().word().hidden_count(), hidden_before);
    }

    /// Whatever the guesses, finished games are fully revealed, losses have
    /// an exhausted countdown, wins keep theirs, and finished games are frozen.
    #[test]
    fn prop_guess_sequences_keep_invariants(
        word in ascii_word(),
        guesses in prop::collection::vec(prop::char::range('a', 'z'), 0..40),
    ) {
        let mut game = Game::create_with_word(word);

        for guessed in guesses {
            if game.is_running() {
                let before = game.state().countdown_value();
                let hit = game.guess(guessed).unwrap();
                let after = game.state().countdown_value();
                prop_assert_eq!(after, if hit { before } else { before - 1 });
            } else {
                let frozen = game.state().view();
                prop_assert_eq!(
                    game.guess(guessed),
                    Err(GameError::InvalidOperation { operation: "guess" })
                );
                prop_assert_eq!(game.state().view(), frozen);
            }

            match game.state().outcome() {
                None => prop_assert!(game.state().countdown_value() > 0),
                Some(Outcome::Lost) => {
                    prop_assert_eq!(game.state().countdown_value(), 0);
                    prop_assert!(game.state().word().is_revealed());
                }
                Some(Outcome::Won) => {
                    prop_assert!(game.state().countdown_value() > 0);
                    prop_assert!(game.state().word().is_revealed());
                }
            }
        }
    }

    /// Forfeit always ends in a revealed, zeroed, finished game.
    #[test]
    fn prop_forfeit_ends_game(
        word in ascii_word(),
        misses in 0u32..6,
    ) {
        let mut game = Game::create_with_word(word.to_ascii_lowercase());
        for _ in 0..misses {
            game.guess('9').unwrap();
        }
        prop_assert_eq!(game.state().countdown_value(), 7 - misses);

        game.forfeit().unwrap();
        prop_assert_eq!(game.state().phase(), Phase::Finished);
        prop_assert_eq!(game.state().countdown_value(), 0);
        prop_assert!(game.state().word().is_revealed());
        let lowered = word.to_ascii_lowercase();
        prop_assert_eq!(game.solution(), Some(lowered.as_str()));
    }
}
