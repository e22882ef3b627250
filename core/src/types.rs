/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, origin at the bottom-left.
pub type Coord2 = (Coord, Coord);

/// Widening multiply for `width * height`.
pub const fn total_cells(w: Coord, h: Coord) -> CellCount {
    (w as CellCount).saturating_mul(h as CellCount)
}

/// `ndarray` index for a coordinate pair.
pub(crate) const fn ix((x, y): Coord2) -> (usize, usize) {
    (x as usize, y as usize)
}

/// `ndarray` shape for a board size.
pub(crate) const fn dim((w, h): Coord2) -> (usize, usize) {
    (w as usize, h as usize)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the up-to-eight in-bounds neighbors of `center`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().filter_map(move |&(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        (x < bounds.0 && y < bounds.1).then_some((x, y))
    })
}
