use serde::{Deserialize, Serialize};

/// One square of the board.
///
/// `value` only carries meaning for safe cells. A cell is never both flagged and revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) value: u8,
    pub(crate) is_mine: bool,
    pub(crate) is_flagged: bool,
    pub(crate) is_revealed: bool,
}

impl Cell {
    pub const fn safe() -> Self {
        Self {
            value: 0,
            is_mine: false,
            is_flagged: false,
            is_revealed: false,
        }
    }

    pub const fn mine() -> Self {
        Self {
            is_mine: true,
            ..Self::safe()
        }
    }

    /// Count of mined neighbors, always 0 for mines.
    pub const fn value(self) -> u8 {
        self.value
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    /// Neither revealed nor flagged.
    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Whether a flood fill may open this cell without the player asking for it.
    pub const fn is_cascade_candidate(self) -> bool {
        self.is_hidden() && !self.is_mine
    }
}
