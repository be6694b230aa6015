//! Text rendering of game progress.

use crate::model::RevealState;

/// The flying saucer, one stage per lost attempt.
const SAUCER: [&str; 7] = [
    "        _.---._\n      .'       '.\n",
    "  _.-~===========~-._\n",
    " (___________________)\n",
    "       \\_______/\n",
    "        |     |\n",
    "        |_0/  |\n",
    "        |  \\  |\n        |  /\\ |\n",
];

/// Number of saucer stages to draw for `countdown` remaining of `maximum`.
///
/// Scaled so that an exhausted countdown always shows the whole saucer. For a
/// budget of 7 this is one stage per wrong guess.
#[must_use]
pub fn saucer_stages(countdown: u32, maximum: u32) -> usize {
    if maximum == 0 {
        return SAUCER.len();
    }
    let used = maximum.saturating_sub(countdown) as usize;
    let maximum = maximum as usize;
    (used * SAUCER.len()).div_ceil(maximum)
}

/// The saucer drawn so far.
#[must_use]
pub fn saucer(countdown: u32, maximum: u32) -> String {
    SAUCER[..saucer_stages(countdown, maximum)].concat()
}

/// The word as `: _ A _ :`, hidden positions as underscores.
#[must_use]
pub fn masked_word(characters: &[RevealState]) -> String {
    let mut out = String::from(": ");
    for state in characters {
        match state {
            RevealState::Hidden => out.push_str("_ "),
            RevealState::Revealed(c) => {
                out.push(*c);
                out.push(' ');
            }
        }
    }
    out.push(':');
    out
}
