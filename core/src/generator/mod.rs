use crate::*;
pub use random::*;

mod random;

/// Strategy producing one round's mine placement.
///
/// Placement happens entirely before any reveal, so a placer gets no
/// information about future clicks.
pub trait MinePlacer {
    fn place(self, config: BoardConfig) -> Minefield;
}
