//! The word to guess and the progress made towards guessing it.

use std::fmt;

use smallvec::SmallVec;

use super::reveal::RevealState;

/// Per-position reveal states. Most words fit inline.
type Characters = SmallVec<[RevealState; 16]>;

/// Stores the word the player is trying to guess and which positions are revealed.
///
/// Positions are Unicode scalar values of the word, index-aligned with
/// `characters()`. Spaces are never guessed: they start out revealed.
#[derive(Clone, PartialEq, Eq)]
pub struct Word {
    complete_word: String,
    characters: Characters,
}

impl Word {
    pub(super) fn new(word: impl Into<String>) -> Self {
        let complete_word = word.into();
        let characters = complete_word
            .chars()
            .map(|c| match c {
                ' ' => RevealState::Revealed(' '),
                _ => RevealState::Hidden,
            })
            .collect();

        Self {
            complete_word,
            characters,
        }
    }

    /// The full answer. Not exposed outside the engine so the answer cannot
    /// leak into rendering before the game ends.
    pub(super) fn complete_word(&self) -> &str {
        &self.complete_word
    }

    /// Does any position hold exactly `c`?
    pub(super) fn contains(&self, c: char) -> bool {
        self.complete_word.chars().any(|actual| actual == c)
    }

    /// Reveal every position holding exactly `guessed` (case-sensitive).
    ///
    /// Always returns `true`: the result says the reveal pass completed, not
    /// that anything matched. Hit/miss is decided by the caller beforehand.
    pub(super) fn guess(&mut self, guessed: char) -> bool {
        for (slot, actual) in self.characters.iter_mut().zip(self.complete_word.chars()) {
            if actual == guessed {
                *slot = RevealState::Revealed(guessed);
            }
        }
        true
    }

    /// Replace every position with its actual character.
    pub(super) fn reveal_all(&mut self) {
        for (slot, actual) in self.characters.iter_mut().zip(self.complete_word.chars()) {
            *slot = RevealState::Revealed(actual);
        }
    }

    /// True iff no position remains hidden.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        !self.characters.iter().any(|c| c.is_hidden())
    }

    /// The reveal state of every position, in order.
    #[must_use]
    pub fn characters(&self) -> &[RevealState] {
        &self.characters
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Number of positions still hidden.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.characters.iter().filter(|c| c.is_hidden()).count()
    }
}

/// Prints the answer only once every position is revealed.
impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Word");
        if self.is_revealed() {
            out.field("complete_word", &self.complete_word);
        }
        out.field("characters", &self.characters).finish_non_exhaustive()
    }
}
