use serde::{Deserialize, Serialize};

/// Player-visible state of one grid position.
///
/// The three states are mutually exclusive and `Revealed` is terminal: no
/// operation moves a revealed cell back to `Hidden` or `Flagged`. A revealed
/// safe cell carries its adjacency count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed(u8),
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Full snapshot of one cell, as returned by [`crate::Board::cell`].
///
/// `adjacent_mines` is only meaningful when `is_mine` is false.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub is_mine: bool,
    pub adjacent_mines: u8,
    pub state: CellState,
}
