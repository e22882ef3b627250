//! Minesweeper board engine: grid generation, mine placement, adjacency
//! counts, reveal propagation, flag bookkeeping, and the counters a caller
//! needs for win/loss detection. Pure state machine, no rendering or input.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use pacer::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod minefield;
mod pacer;
mod types;

/// Dimensions and mine count for one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects malformed configurations outright instead of clamping: both
    /// dimensions must be non-zero and the mine count below the cell count.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Result<Self> {
        if size_x == 0 || size_y == 0 || mines >= total_cells(size_x, size_y) {
            return Err(BoardError::InvalidConfig);
        }
        Ok(Self::new_unchecked((size_x, size_y), mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        total_cells(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// The three shipped presets. The engine itself is preset-agnostic and only
/// ever sees the numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Easy => BoardConfig::new_unchecked((10, 8), 10),
            Self::Normal => BoardConfig::new_unchecked((18, 14), 40),
            Self::Hard => BoardConfig::new_unchecked((24, 20), 99),
        }
    }

    /// Cycle order used by the difficulty button.
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Normal,
            Self::Normal => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(BoardConfig::new((0, 5), 1), Err(BoardError::InvalidConfig));
        assert_eq!(BoardConfig::new((5, 0), 1), Err(BoardError::InvalidConfig));
    }

    #[test]
    fn config_rejects_mine_count_at_or_above_cell_count() {
        assert_eq!(BoardConfig::new((3, 3), 9), Err(BoardError::InvalidConfig));
        assert_eq!(BoardConfig::new((3, 3), 10), Err(BoardError::InvalidConfig));
        assert!(BoardConfig::new((3, 3), 8).is_ok());
        assert!(BoardConfig::new((3, 3), 0).is_ok());
    }

    #[test]
    fn shipped_presets_validate() {
        for preset in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let config = preset.config();
            assert!(BoardConfig::new(config.size, config.mines).is_ok());
        }
    }

    #[test]
    fn preset_values_match_the_shipped_difficulties() {
        let easy = Difficulty::Easy.config();
        assert_eq!((easy.size, easy.mines), ((10, 8), 10));
        let hard = Difficulty::Hard.config();
        assert_eq!(hard.safe_cells(), 24 * 20 - 99);
    }

    #[test]
    fn difficulty_cycles_through_all_three() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Normal);
        assert_eq!(Difficulty::Normal.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }
}
