use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
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

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::surrounding(index, array_size(self))
    }

    fn iter_orthogonal(&self, index: Coord2) -> NeighborIter {
        NeighborIter::orthogonal(index, array_size(self))
    }
}

fn array_size<T>(array: &Array2<T>) -> Coord2 {
    let (x, y) = array.dim();
    (
        x.try_into().unwrap_or(Coord::MAX),
        y.try_into().unwrap_or(Coord::MAX),
    )
}

/// 3×3 block minus the center.
const SURROUNDING: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Full 3×3 block, center included.
const BLOCK: [(i8, i8); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// In-bounds coordinates around a center cell, following a fixed displacement table.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(i8, i8)],
    index: u8,
}

impl NeighborIter {
    /// Up to 8 neighbors: the 3×3 block minus the center.
    pub fn surrounding(center: Coord2, bounds: Coord2) -> Self {
        Self::with_deltas(center, bounds, &SURROUNDING)
    }

    /// Up to 4 neighbors sharing an edge with the center.
    pub fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::with_deltas(center, bounds, &ORTHOGONAL)
    }

    /// The whole 3×3 block, center included.
    pub fn block(center: Coord2, bounds: Coord2) -> Self {
        Self::with_deltas(center, bounds, &BLOCK)
    }

    fn with_deltas(center: Coord2, bounds: Coord2, deltas: &'static [(i8, i8)]) -> Self {
        Self {
            center,
            bounds,
            deltas,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.deltas.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
