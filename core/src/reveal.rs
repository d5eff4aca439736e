use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rule deciding how far a reveal spreads from a zero-valued cell.
///
/// Every policy shares the same guarantees: mines and flagged cells are never opened by a
/// cascade, revealed cells are never processed again, and each cell is visited at most once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPolicy {
    /// Spread to all 8 neighbors, keep expanding only from cells with value 0.
    #[default]
    Standard,
    /// Spread to the 4 orthogonal neighbors. A neighbor is opened only if its 3×3 block,
    /// itself included, holds a safe cell with value 0, and every opened cell keeps spreading.
    Orthogonal,
    /// Spread to all 8 neighbors, opening and expanding from any cell with value 0 or 1.
    Permissive,
}

/// What a single cascade did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeReport {
    /// Cells opened by the cascade, the origin excluded.
    pub revealed: CellCount,
    /// Distinct cells examined, the origin excluded.
    pub visited: CellCount,
}

impl RevealPolicy {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Orthogonal, Self::Permissive];

    /// Spreads a reveal outwards from `origin`, which the caller has already opened.
    pub fn cascade(self, grid: &mut Grid, origin: Coord2) -> CascadeReport {
        let mut report = CascadeReport::default();
        if !grid.contains(origin) {
            return report;
        }

        let mut visited: Array2<bool> = Array2::default(grid.size().to_nd_index());
        visited[origin.to_nd_index()] = true;
        let mut to_visit: Vec<Coord2> = self.spread(grid, origin).collect();
        log::trace!(
            "Starting {:?} cascade from {:?}, initial neighbors: {:?}",
            self,
            origin,
            to_visit
        );

        while let Some(coords) = to_visit.pop() {
            let seen = &mut visited[coords.to_nd_index()];
            if *seen {
                continue;
            }
            *seen = true;
            report.visited += 1;

            if !grid[coords].is_cascade_candidate() || !self.admits(grid, coords) {
                continue;
            }

            if let Some(cell) = grid.cell_mut(coords) {
                cell.is_revealed = true;
            }
            report.revealed += 1;
            log::trace!(
                "Cascade opened cell at {:?}, value: {}",
                coords,
                grid[coords].value
            );

            if self.expands_from(grid[coords]) {
                to_visit.extend(
                    self.spread(grid, coords)
                        .filter(|pos| !visited[pos.to_nd_index()]),
                );
            }
        }

        log::debug!(
            "Cascade from {:?} opened {} cells, visited {}",
            origin,
            report.revealed,
            report.visited
        );
        report
    }

    fn spread(self, grid: &Grid, coords: Coord2) -> NeighborIter {
        match self {
            Self::Orthogonal => grid.orthogonal_neighbors_of(coords),
            Self::Standard | Self::Permissive => grid.neighbors_of(coords),
        }
    }

    fn admits(self, grid: &Grid, coords: Coord2) -> bool {
        match self {
            Self::Standard => true,
            Self::Orthogonal => NeighborIter::block(coords, grid.size()).any(|pos| {
                let cell = grid[pos];
                !cell.is_mine && cell.value == 0
            }),
            Self::Permissive => grid[coords].value <= 1,
        }
    }

    fn expands_from(self, cell: Cell) -> bool {
        match self {
            Self::Standard => cell.value == 0,
            Self::Orthogonal | Self::Permissive => true,
        }
    }
}
