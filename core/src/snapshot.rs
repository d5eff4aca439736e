use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// How a renderer should draw one cell. Mines stay hidden until revealed or the game is lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Unflagged mine shown after a loss.
    Mine,
    /// The mine that was revealed.
    Exploded,
    /// Flag on a safe cell, shown after a loss.
    Misflagged,
}

impl CellView {
    fn of(cell: Cell, status: GameStatus) -> Self {
        let lost = matches!(status, GameStatus::Lost);
        match (cell.is_revealed, cell.is_flagged, cell.is_mine) {
            (true, _, true) => Self::Exploded,
            (true, _, false) => Self::Revealed(cell.value),
            (false, true, false) if lost => Self::Misflagged,
            (false, true, _) => Self::Flagged,
            (false, false, true) if lost => Self::Mine,
            (false, false, _) => Self::Hidden,
        }
    }
}

/// Restart button face.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    #[default]
    Smile,
    /// A button is held over the board or the restart button.
    Surprised,
    Dead,
}

/// Read-only picture of a session, taken after the frame's input has been applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub status: GameStatus,
    pub mine_count: CellCount,
    pub flags_remaining: i32,
    pub face: Face,
    pub hovered: Option<Target>,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_session<G>(session: &Session<G>) -> Self {
        let grid = session.grid();
        let state = session.state();
        let pointer = session.pointer();
        let status = state.status();

        let face = match (status, pointer.held) {
            (GameStatus::Lost, _) => Face::Dead,
            (_, true) => Face::Surprised,
            (_, false) => Face::Smile,
        };

        let mut cells = Array2::from_elem(grid.size().to_nd_index(), CellView::Hidden);
        for (coords, &cell) in grid.iter() {
            cells[coords.to_nd_index()] = CellView::of(cell, status);
        }

        Self {
            size: grid.size(),
            status,
            mine_count: state.mine_count(),
            flags_remaining: state.flags_remaining(),
            face,
            hovered: pointer.hovered,
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}
