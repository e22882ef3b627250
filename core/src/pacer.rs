use serde::{Deserialize, Serialize};

const START_DELAY: f32 = 0.5;
const DECAY: f32 = 0.87;
const MIN_DELAY: f32 = 0.2;

/// Shrinking delay between mine pops in the loss sequence.
///
/// Purely arithmetic; the presentation layer owns the actual timer and asks
/// for the next delay each time it fires, revealing mines from
/// [`crate::Board::mine_coords`] one at a time. Starts at half a second,
/// shrinks 13% per step, floored at 0.2 s.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LossRevealPacer {
    delay: f32,
}

impl LossRevealPacer {
    pub const fn new() -> Self {
        Self { delay: START_DELAY }
    }

    /// Delay in seconds to wait before the next pop; shrinks the interval
    /// for the step after.
    pub fn next_delay(&mut self) -> f32 {
        let current = self.delay;
        self.delay = (self.delay * DECAY).max(MIN_DELAY);
        current
    }
}

impl Default for LossRevealPacer {
    fn default() -> Self {
        Self::new()
    }
}
