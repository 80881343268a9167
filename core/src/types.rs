use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The full 3x3 block around a cell, center included. The flood-fill sweep
/// visits the center again and relies on the revealed guard to stop.
const BLOCK_OFFSETS: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Owned iterator over a fixed offset table, clipped to the board bounds.
#[derive(Debug)]
pub struct OffsetIter {
    center: Coord2,
    bounds: Coord2,
    offsets: &'static [(isize, isize)],
    index: u8,
}

impl OffsetIter {
    fn new(center: Coord2, bounds: Coord2, offsets: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            bounds,
            offsets,
            index: 0,
        }
    }
}

impl Iterator for OffsetIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= self.offsets.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, self.offsets[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

pub trait GridIterExt {
    /// In-bounds coordinates of the up-to-8 neighbors of `index`.
    fn iter_neighbors(&self, index: Coord2) -> OffsetIter;

    /// In-bounds coordinates of the 3x3 block centered on `index`, center included.
    fn iter_block(&self, index: Coord2) -> OffsetIter;
}

impl<T> GridIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> OffsetIter {
        OffsetIter::new(index, grid_bounds(self), &NEIGHBOR_OFFSETS)
    }

    fn iter_block(&self, index: Coord2) -> OffsetIter {
        OffsetIter::new(index, grid_bounds(self), &BLOCK_OFFSETS)
    }
}

fn grid_bounds<T>(grid: &Array2<T>) -> Coord2 {
    let dim = grid.dim();
    (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
}
