use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Mine placement strategy, asked for a fresh mask on every new game.
pub trait MineGenerator {
    fn generate(&mut self, config: &GameConfig) -> Array2<bool>;
}

/// Always hands out the same mine mask. Used for replays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayout {
    mine_mask: Array2<bool>,
}

impl FixedLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        Self { mine_mask }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Config matching the layout's shape. The density is irrelevant to a fixed layout.
    pub fn game_config(&self) -> GameConfig {
        let (x, y) = self.mine_mask.dim();
        GameConfig::new_unchecked(
            (
                x.try_into().unwrap_or(Coord::MAX),
                y.try_into().unwrap_or(Coord::MAX),
            ),
            1,
        )
    }
}

impl MineGenerator for FixedLayout {
    fn generate(&mut self, _config: &GameConfig) -> Array2<bool> {
        self.mine_mask.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_rejects_out_of_range_mines() {
        assert_eq!(
            FixedLayout::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn fixed_layout_repeats_itself() {
        let mut layout = FixedLayout::from_mine_coords((2, 3), &[(1, 2)]).unwrap();
        let config = layout.game_config();

        assert_eq!(config.size, (2, 3));
        let first = layout.generate(&config);
        let second = layout.generate(&config);
        assert_eq!(first, second);
        assert!(first[[1, 2]]);
        assert_eq!(first.iter().filter(|&&mine| mine).count(), 1);
    }
}
