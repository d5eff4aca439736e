use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

/// Pointer position in pixels, relative to the top-left corner of the board.
pub type Pixel = (i32, i32);

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PointerButtons: u8 {
        /// Reveals the cell under the pointer.
        const PRIMARY   = 1;
        /// Toggles the flag under the pointer.
        const SECONDARY = 1 << 1;
    }
}

/// Pointer state sampled once per frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub pointer: Pixel,
    /// Buttons currently held down.
    pub down: PointerButtons,
    /// Buttons released since the previous frame.
    pub released: PointerButtons,
}

impl FrameInput {
    /// Pointer moved (or stayed), nothing pressed.
    pub const fn hover(pointer: Pixel) -> Self {
        Self {
            pointer,
            down: PointerButtons::empty(),
            released: PointerButtons::empty(),
        }
    }

    pub const fn hold(pointer: Pixel, buttons: PointerButtons) -> Self {
        Self {
            pointer,
            down: buttons,
            released: PointerButtons::empty(),
        }
    }

    pub const fn release(pointer: Pixel, buttons: PointerButtons) -> Self {
        Self {
            pointer,
            down: PointerButtons::empty(),
            released: buttons,
        }
    }
}

/// What the pointer is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Cell(Coord2),
    Restart,
}

/// Pixel geometry of the board: square cells of `cell_size` pixels laid out from the origin,
/// and the restart button in the slot at `(width + 1, 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    size: Coord2,
    cell_size: u16,
}

impl BoardLayout {
    pub const DEFAULT_CELL_SIZE: u16 = 64;

    pub fn new(size: Coord2, cell_size: u16) -> Self {
        Self {
            size,
            cell_size: cell_size.max(1),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    pub fn restart_slot(&self) -> Pixel {
        (i32::from(self.size.0) + 1, 1)
    }

    pub fn hit_test(&self, (px, py): Pixel) -> Option<Target> {
        let cell_size = i32::from(self.cell_size);
        let slot = (px.div_euclid(cell_size), py.div_euclid(cell_size));

        if slot == self.restart_slot() {
            return Some(Target::Restart);
        }

        let x = Coord::try_from(slot.0).ok()?;
        let y = Coord::try_from(slot.1).ok()?;
        (x < self.size.0 && y < self.size.1).then_some(Target::Cell((x, y)))
    }

    pub fn cell_center(&self, (x, y): Coord2) -> Pixel {
        self.slot_center((x.into(), y.into()))
    }

    pub fn restart_center(&self) -> Pixel {
        self.slot_center(self.restart_slot())
    }

    fn slot_center(&self, (x, y): Pixel) -> Pixel {
        let cell_size = i32::from(self.cell_size);
        let half = cell_size / 2;
        (x * cell_size + half, y * cell_size + half)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(GameConfig::CLASSIC.size, Self::DEFAULT_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_map_to_cells() {
        let layout = BoardLayout::default();

        assert_eq!(layout.hit_test((0, 0)), Some(Target::Cell((0, 0))));
        assert_eq!(layout.hit_test((63, 63)), Some(Target::Cell((0, 0))));
        assert_eq!(layout.hit_test((64, 130)), Some(Target::Cell((1, 2))));
        assert_eq!(layout.hit_test((575, 575)), Some(Target::Cell((8, 8))));
    }

    #[test]
    fn outside_the_board_hits_nothing() {
        let layout = BoardLayout::default();

        assert_eq!(layout.hit_test((576, 0)), None);
        assert_eq!(layout.hit_test((0, 576)), None);
        assert_eq!(layout.hit_test((-1, 10)), None);
        assert_eq!(layout.hit_test((10, -63)), None);
        assert_eq!(layout.hit_test((i32::MAX, i32::MAX)), None);
    }

    #[test]
    fn restart_button_sits_right_of_the_board() {
        let layout = BoardLayout::default();

        assert_eq!(layout.restart_slot(), (10, 1));
        assert_eq!(layout.hit_test((10 * 64 + 5, 64 + 5)), Some(Target::Restart));
        assert_eq!(layout.hit_test(layout.restart_center()), Some(Target::Restart));
        assert_eq!(layout.hit_test((9 * 64 + 5, 64 + 5)), None);
    }

    #[test]
    fn cell_center_round_trips_through_hit_test() {
        let layout = BoardLayout::new((5, 4), 10);

        assert_eq!(layout.cell_center((2, 3)), (25, 35));
        assert_eq!(layout.hit_test(layout.cell_center((4, 3))), Some(Target::Cell((4, 3))));
    }

    #[test]
    fn zero_cell_size_is_clamped() {
        let layout = BoardLayout::new((3, 3), 0);
        assert_eq!(layout.cell_size(), 1);
        assert_eq!(layout.hit_test((2, 2)), Some(Target::Cell((2, 2))));
    }
}
