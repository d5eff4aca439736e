use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both ends are terminal, only a reset brings the board back to `Playing`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Status and flag counters of the current game.
///
/// The game is won once every mine carries a flag, wrong flags elsewhere do not prevent it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    status: GameStatus,
    mine_count: CellCount,
    flags_placed: CellCount,
    correct_flags: CellCount,
}

impl GameState {
    pub fn new(mine_count: CellCount) -> Self {
        Self {
            status: GameStatus::Playing,
            mine_count,
            flags_placed: 0,
            correct_flags: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    pub fn correct_flags(&self) -> CellCount {
        self.correct_flags
    }

    /// Mines minus placed flags, negative once the player over-flags.
    pub fn flags_remaining(&self) -> i32 {
        i32::from(self.mine_count) - i32::from(self.flags_placed)
    }

    pub(crate) fn record_flag(&mut self, on_mine: bool) {
        self.flags_placed += 1;
        if on_mine {
            self.correct_flags += 1;
        }
    }

    pub(crate) fn record_unflag(&mut self, on_mine: bool) {
        self.flags_placed = self.flags_placed.saturating_sub(1);
        if on_mine {
            self.correct_flags = self.correct_flags.saturating_sub(1);
        }
    }

    pub(crate) fn mark_lost(&mut self) {
        if self.status.is_playing() {
            self.status = GameStatus::Lost;
        }
    }

    /// Moves to `Won` when every mine is flagged. Returns whether this call ended the game.
    pub(crate) fn evaluate_win(&mut self) -> bool {
        if self.status.is_playing() && self.correct_flags == self.mine_count {
            self.status = GameStatus::Won;
            true
        } else {
            false
        }
    }
}
