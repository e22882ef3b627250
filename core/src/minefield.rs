use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Round-scoped mine placement plus the adjacency counts derived from it.
///
/// Built once per round by a [`MinePlacer`] and never mutated afterwards; the
/// mutable per-round state lives in [`Board`]. Mine coordinates are kept in
/// placement order so a caller can replay them for the loss sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mines: Array2<bool>,
    adjacent: Array2<u8>,
    placed: Vec<Coord2>,
}

impl Minefield {
    /// Builds a field from explicit mine coordinates. Duplicates are ignored.
    ///
    /// This is the deterministic path used by tests and replays; gameplay
    /// goes through a [`MinePlacer`].
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(dim(size));
        let mut placed = Vec::with_capacity(mine_coords.len());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(BoardError::OutOfBounds);
            }
            if !mines[ix(coords)] {
                mines[ix(coords)] = true;
                placed.push(coords);
            }
        }

        Ok(Self::from_parts(mines, placed))
    }

    pub(crate) fn from_parts(mines: Array2<bool>, placed: Vec<Coord2>) -> Self {
        let adjacent = count_adjacent(&mines);
        Self {
            mines,
            adjacent,
            placed,
        }
    }

    pub fn size(&self) -> Coord2 {
        let shape = self.mines.dim();
        (shape.0 as Coord, shape.1 as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.placed.len() as CellCount
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines[ix(coords)]
    }

    /// Precomputed mine count among the in-bounds neighbors; zero for mine
    /// cells themselves.
    pub fn adjacent_count(&self, coords: Coord2) -> u8 {
        self.adjacent[ix(coords)]
    }

    /// Mine coordinates in placement order.
    pub fn mine_coords(&self) -> &[Coord2] {
        &self.placed
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }
}

fn count_adjacent(mines: &Array2<bool>) -> Array2<u8> {
    let shape = mines.dim();
    let bounds = (shape.0 as Coord, shape.1 as Coord);

    Array2::from_shape_fn(shape, |(x, y)| {
        if mines[(x, y)] {
            return 0;
        }
        neighbors((x as Coord, y as Coord), bounds)
            .filter(|&pos| mines[ix(pos)])
            .count() as u8
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_adjacency() {
        let field = Minefield::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(field.adjacent_count((1, 1)), 2);
        assert_eq!(field.adjacent_count((1, 0)), 1);
        assert_eq!(field.adjacent_count((2, 0)), 0);
        assert_eq!(field.adjacent_count((0, 2)), 0);
    }

    #[test]
    fn adjacency_matches_brute_force() {
        let mines = [(0, 1), (3, 0), (3, 3), (1, 2)];
        let field = Minefield::from_mine_coords((4, 4), &mines).unwrap();

        for x in 0..4 {
            for y in 0..4 {
                if field.contains_mine((x, y)) {
                    continue;
                }
                let expected = neighbors((x, y), (4, 4))
                    .filter(|&pos| mines.contains(&pos))
                    .count() as u8;
                assert_eq!(field.adjacent_count((x, y)), expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn counts_and_placement_order() {
        let field = Minefield::from_mine_coords((3, 2), &[(2, 1), (0, 0)]).unwrap();

        assert_eq!(field.mine_count(), 2);
        assert_eq!(field.total_cells(), 6);
        assert_eq!(field.safe_cell_count(), 4);
        assert_eq!(field.mine_coords(), &[(2, 1), (0, 0)]);
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let field = Minefield::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(field.mine_count(), 1);
    }

    #[test]
    fn out_of_range_mine_coords_rejected() {
        let result = Minefield::from_mine_coords((2, 2), &[(2, 0)]);
        assert_eq!(result, Err(BoardError::OutOfBounds));
    }

    #[test]
    fn validate_coords_bounds() {
        let field = Minefield::from_mine_coords((2, 3), &[]).unwrap();
        assert_eq!(field.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(field.validate_coords((2, 0)), Err(BoardError::OutOfBounds));
        assert_eq!(field.validate_coords((0, 3)), Err(BoardError::OutOfBounds));
    }
}
