#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use host::*;
pub use input::*;
pub use reveal::*;
pub use session::*;
pub use snapshot::*;
pub use state::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod host;
mod input;
mod reveal;
mod session;
mod snapshot;
mod state;
mod types;

/// Board shape and mine-density rule for a game.
///
/// Every cell is mined independently with probability `1 / (density + 1)`, so the
/// realized mine count varies from board to board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub density: u8,
}

impl GameConfig {
    pub const CLASSIC: Self = Self::new_unchecked((9, 9), 4);

    pub const fn new_unchecked(size: Coord2, density: u8) -> Self {
        Self { size, density }
    }

    pub fn new(size: Coord2, density: u8) -> Result<Self> {
        let config = Self::new_unchecked(size, density);
        config.validate()?;
        Ok(config)
    }

    /// Uses half the board width as density, the draw the classic board is built with.
    pub fn with_default_density(size: Coord2) -> Result<Self> {
        Self::new(size, (size.0 / 2).max(1))
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.density == 0 {
            return Err(GameError::InvalidDensity);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
    Won,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::CLASSIC.total_cells(), 81);
    }

    #[test]
    fn empty_board_is_rejected() {
        assert_eq!(GameConfig::new((0, 9), 4), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((9, 0), 4), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn zero_density_is_rejected() {
        assert_eq!(GameConfig::new((9, 9), 0), Err(GameError::InvalidDensity));
    }

    #[test]
    fn default_density_follows_width() {
        assert_eq!(GameConfig::with_default_density((9, 9)).unwrap().density, 4);
        assert_eq!(GameConfig::with_default_density((1, 1)).unwrap().density, 1);
    }
}
