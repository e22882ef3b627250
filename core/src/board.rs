use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The target was flagged or already revealed; nothing changed.
    Ignored,
    /// The target held a mine. The cell is now revealed; ending the round is
    /// the caller's decision.
    MineHit,
    /// The target was safe; carries its adjacency count.
    Revealed(u8),
}

impl RevealOutcome {
    /// Whether this outcome changed any cell.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Ignored,
    Flagged,
    Unflagged,
}

/// A reveal outcome plus every cell whose state changed during the call, so a
/// renderer can diff instead of redrawing the whole grid. A flood fill lists
/// each absorbed cell exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub changed: Vec<Coord2>,
}

impl RevealReport {
    fn ignored() -> Self {
        Self {
            outcome: RevealOutcome::Ignored,
            changed: Vec::new(),
        }
    }
}

/// One round of play over a fixed [`Minefield`].
///
/// Created fresh per round; a restart or difficulty change builds a new board
/// and drops this one rather than mutating it piecemeal. The board tracks
/// counts only and holds no win/loss state: the round is won when
/// [`remaining_safe_count`](Self::remaining_safe_count) reaches zero and lost
/// when a reveal returns [`RevealOutcome::MineHit`], both by caller policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    minefield: Minefield,
    grid: Array2<CellState>,
    remaining_safe: CellCount,
    flagged: CellCount,
}

impl Board {
    pub fn new(minefield: Minefield) -> Self {
        let size = minefield.size();
        let remaining_safe = minefield.safe_cell_count();
        Self {
            minefield,
            grid: Array2::default(dim(size)),
            remaining_safe,
            flagged: 0,
        }
    }

    /// Places mines with `placer` and wraps the result in a fresh board.
    pub fn generate<P: MinePlacer>(config: BoardConfig, placer: P) -> Self {
        Self::new(placer.place(config))
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    /// Non-mine cells not yet revealed; zero means the board is cleared.
    pub fn remaining_safe_count(&self) -> CellCount {
        self.remaining_safe
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining_safe == 0
    }

    /// Display counter: mines minus currently flagged cells. Deliberately
    /// unclamped, so over-flagging drives it negative.
    pub fn remaining_flag_budget(&self) -> isize {
        self.minefield.mine_count() as isize - self.flagged as isize
    }

    /// Mine coordinates in placement order, for driving the loss sequence.
    pub fn mine_coords(&self) -> &[Coord2] {
        self.minefield.mine_coords()
    }

    pub fn cell(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.minefield.validate_coords(coords)?;
        Ok(CellView {
            is_mine: self.minefield.contains_mine(coords),
            adjacent_mines: self.minefield.adjacent_count(coords),
            state: self.grid[ix(coords)],
        })
    }

    /// Reveals a cell.
    ///
    /// Flagged and already-revealed targets are legal no-ops. Revealing a
    /// mine marks that one cell and leaves the safe count untouched. A safe
    /// cell with no adjacent mines triggers a flood fill of its zero region
    /// and the numbered border around it.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let coords = self.minefield.validate_coords(coords)?;

        match self.grid[ix(coords)] {
            CellState::Flagged | CellState::Revealed(_) => Ok(RevealReport::ignored()),
            CellState::Hidden if self.minefield.contains_mine(coords) => {
                self.grid[ix(coords)] = CellState::Revealed(0);
                log::debug!("mine hit at {coords:?}");
                Ok(RevealReport {
                    outcome: RevealOutcome::MineHit,
                    changed: vec![coords],
                })
            }
            CellState::Hidden => {
                let count = self.minefield.adjacent_count(coords);
                let mut changed = Vec::new();
                self.reveal_safe(coords, count, &mut changed);
                if count == 0 {
                    self.flood_from(coords, &mut changed);
                }
                log::debug!(
                    "revealed {coords:?} (adjacent {count}), {} cells in report, {} safe left",
                    changed.len(),
                    self.remaining_safe
                );
                Ok(RevealReport {
                    outcome: RevealOutcome::Revealed(count),
                    changed,
                })
            }
        }
    }

    /// Toggles the flag on an unrevealed cell. Revealed cells are a no-op.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.minefield.validate_coords(coords)?;

        Ok(match self.grid[ix(coords)] {
            CellState::Hidden => {
                self.grid[ix(coords)] = CellState::Flagged;
                self.flagged += 1;
                Flagged
            }
            CellState::Flagged => {
                self.grid[ix(coords)] = CellState::Hidden;
                self.flagged -= 1;
                Unflagged
            }
            CellState::Revealed(_) => Ignored,
        })
    }

    fn reveal_safe(&mut self, coords: Coord2, count: u8, changed: &mut Vec<Coord2>) {
        self.grid[ix(coords)] = CellState::Revealed(count);
        self.remaining_safe -= 1;
        changed.push(coords);
    }

    /// Iterative zero-region expansion with an explicit worklist.
    ///
    /// Mines are never opened. Flagged cells absorbed by the flood are
    /// un-flagged first, restoring the flag budget, then revealed. Each cell
    /// is revealed at most once, so duplicates in the queue are harmless and
    /// the loop is bounded by the cell count.
    fn flood_from(&mut self, start: Coord2, changed: &mut Vec<Coord2>) {
        let bounds = self.size();
        let mut queue: VecDeque<Coord2> = neighbors(start, bounds).collect();

        while let Some(coords) = queue.pop_front() {
            if self.minefield.contains_mine(coords) {
                continue;
            }
            match self.grid[ix(coords)] {
                CellState::Revealed(_) => continue,
                CellState::Flagged => {
                    self.flagged -= 1;
                    log::trace!("flood unflagged {coords:?}");
                }
                CellState::Hidden => {}
            }

            let count = self.minefield.adjacent_count(coords);
            self.reveal_safe(coords, count, changed);
            log::trace!("flood revealed {coords:?} (adjacent {count})");

            if count == 0 {
                queue.extend(neighbors(coords, bounds));
            }
        }
    }
}
