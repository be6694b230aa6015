//! Remaining wrong-guess allowance.

/// Countdown - if 0 is reached, the game is lost.
///
/// Invariant: `0 <= value <= initial value`. The mutators are only reachable
/// from the session; calling them on an exhausted countdown is a contract
/// violation and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    value: u32,
}

impl Countdown {
    /// Create a countdown starting at `initial_value`.
    #[must_use]
    pub(super) fn new(initial_value: u32) -> Self {
        Self {
            value: initial_value,
        }
    }

    /// Decrease the countdown by one and return the new value.
    ///
    /// # Panics
    ///
    /// Panics if the countdown is already zero.
    pub(super) fn decrease(&mut self) -> u32 {
        assert!(
            self.value > 0,
            "The countdown value can't be decreased if it already is {}",
            self.value
        );
        self.value -= 1;
        self.value
    }

    /// Force the countdown to zero.
    ///
    /// # Panics
    ///
    /// Panics if the countdown is already zero.
    pub(super) fn set_to_zero(&mut self) {
        assert!(
            self.value > 0,
            "Countdown value can only be set to zero if it is positive. It is {}",
            self.value
        );
        self.value = 0;
    }

    /// Current value.
    #[must_use]
    pub fn current_value(&self) -> u32 {
        self.value
    }

    /// Whether the countdown has run out.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.value == 0
    }
}
