use ndarray::Array2;

use super::*;

/// Uniform mine placement without replacement.
///
/// Runs a partial Fisher-Yates over the flat cell index range: each draw
/// picks uniformly from the remaining pool and swap-removes it, so every cell
/// has equal probability and only `mines` draws are made. The first click is
/// not guaranteed safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, config: BoardConfig) -> Minefield {
        use rand::prelude::*;

        let (width, _) = config.size;
        let mut mines: Array2<bool> = Array2::default(dim(config.size));
        let mut placed = Vec::with_capacity(config.mines as usize);

        let mut pool: Vec<CellCount> = (0..config.total_cells()).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..config.mines {
            if pool.is_empty() {
                // unreachable with a validated config
                log::warn!(
                    "mine count {} exceeds cell count {}, field saturated",
                    config.mines,
                    config.total_cells()
                );
                break;
            }
            let pick = rng.random_range(0..pool.len());
            let index = pool.swap_remove(pick);
            let coords = (
                (index % width as CellCount) as Coord,
                (index / width as CellCount) as Coord,
            );
            mines[ix(coords)] = true;
            placed.push(coords);
        }

        log::debug!(
            "placed {} mines on a {}x{} field (seed {})",
            placed.len(),
            config.size.0,
            config.size.1,
            self.seed
        );
        Minefield::from_parts(mines, placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(size: Coord2, mines: CellCount, seed: u64) -> Minefield {
        let config = BoardConfig::new(size, mines).unwrap();
        RandomPlacer::new(seed).place(config)
    }

    #[test]
    fn places_exactly_the_requested_mine_count() {
        for seed in 0..20 {
            let field = place((10, 8), 10, seed);
            assert_eq!(field.mine_count(), 10);
            assert_eq!(field.mine_coords().len(), 10);

            let mask_count = (0..10)
                .flat_map(|x| (0..8).map(move |y| (x, y)))
                .filter(|&pos| field.contains_mine(pos))
                .count();
            assert_eq!(mask_count, 10);
        }
    }

    #[test]
    fn placed_coordinates_are_distinct_and_in_bounds() {
        let field = place((6, 6), 20, 7);
        let coords = field.mine_coords();

        for (i, &pos) in coords.iter().enumerate() {
            assert!(pos.0 < 6 && pos.1 < 6);
            assert!(!coords[i + 1..].contains(&pos), "duplicate mine at {pos:?}");
        }
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let a = place((18, 14), 40, 42);
        let b = place((18, 14), 40, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_mines_leaves_the_field_empty() {
        let field = place((4, 4), 0, 1);
        assert_eq!(field.mine_count(), 0);
        assert_eq!(field.safe_cell_count(), 16);
    }
}
