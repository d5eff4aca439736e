use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// The board: a `width × height` array of cells indexed by `(x, y)`.
/// Only built through `from_mine_mask`, which bounds both axes by `Coord::MAX`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Draws a fresh mine layout for `config` and computes every neighbor value.
    pub fn generate<G: MineGenerator + ?Sized>(
        config: &GameConfig,
        generator: &mut G,
    ) -> Result<Self> {
        config.validate()?;
        let mine_mask = generator.generate(config);
        if mine_mask.dim() != (usize::from(config.size.0), usize::from(config.size.1)) {
            return Err(GameError::LayoutMismatch);
        }
        Self::from_mine_mask(&mine_mask)
    }

    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (x, y) = mine_mask.dim();
        if x == 0 || y == 0 || x > usize::from(Coord::MAX) || y > usize::from(Coord::MAX) {
            return Err(GameError::InvalidDimensions);
        }

        let cells = mine_mask.map(|&is_mine| if is_mine { Cell::mine() } else { Cell::safe() });
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidDimensions)?;

        let mut grid = Self { cells, mine_count };
        grid.compute_neighbor_values();
        Ok(grid)
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let layout = FixedLayout::from_mine_coords(size, mine_coords)?;
        Self::generate(&layout.game_config(), &mut layout.clone())
    }

    /// Stores, for every safe cell, how many of its in-bounds neighbors are mines.
    pub fn compute_neighbor_values(&mut self) {
        let (x_end, y_end) = self.size();
        for x in 0..x_end {
            for y in 0..y_end {
                let coords = (x, y);
                let value = if self[coords].is_mine {
                    0
                } else {
                    self.adjacent_mine_count(coords)
                };
                self.cells[coords.to_nd_index()].value = value;
            }
        }
    }

    /// Up to 8 in-bounds neighbor coordinates of `coords`.
    pub fn neighbors_of(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Up to 4 in-bounds neighbors sharing an edge with `coords`.
    pub fn orthogonal_neighbors_of(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_orthogonal(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self.neighbors_of(coords).filter(|&pos| self[pos].is_mine).count();
        // at most 8 neighbors
        count as u8
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        // from_mine_mask keeps both axes within Coord
        (x as Coord, y as Coord)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self.cells[coords.to_nd_index()])
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (x, y) = self.size();
        mult(x, y)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed).count() as CellCount
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        if self.contains(coords) {
            Some(&mut self.cells[coords.to_nd_index()])
        } else {
            None
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
