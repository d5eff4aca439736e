use rand::prelude::*;

use super::*;

/// Independent per-cell draw: a uniform value in `[0, density]` mines the cell when it lands on
/// `density / 2`.
#[derive(Clone, Debug)]
pub struct DensityGenerator {
    rng: SmallRng,
}

impl DensityGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineGenerator for DensityGenerator {
    fn generate(&mut self, config: &GameConfig) -> Array2<bool> {
        let max = config.density;
        let hit = max / 2;

        let mine_mask = Array2::from_shape_fn(config.size.to_nd_index(), |_| {
            self.rng.random_range(0..=max) == hit
        });

        let count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        if count == 0 {
            log::warn!(
                "Generated a {}x{} board without mines, it starts out won",
                config.size.0,
                config.size.1
            );
        } else {
            log::debug!(
                "Generated {} mines on a {}x{} board",
                count,
                config.size.0,
                config.size.1
            );
        }
        mine_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_board() {
        let config = GameConfig::CLASSIC;
        let first = DensityGenerator::new(7).generate(&config);
        let second = DensityGenerator::new(7).generate(&config);
        assert_eq!(first, second);
        assert_eq!(first.dim(), (9, 9));
    }

    #[test]
    fn successive_boards_differ() {
        let config = GameConfig::new((30, 16), 4).unwrap();
        let mut generator = DensityGenerator::new(11);
        let first = generator.generate(&config);
        let second = generator.generate(&config);
        assert_ne!(first, second);
    }

    #[test]
    fn density_one_mines_about_half() {
        let config = GameConfig::new((100, 100), 1).unwrap();
        let mask = DensityGenerator::new(3).generate(&config);
        let count = mask.iter().filter(|&&is_mine| is_mine).count();
        assert!((4000..6000).contains(&count), "got {count} mines");
    }

    #[test]
    fn classic_density_mines_about_a_fifth() {
        let config = GameConfig::new((100, 100), 4).unwrap();
        let mask = DensityGenerator::new(5).generate(&config);
        let count = mask.iter().filter(|&&is_mine| is_mine).count();
        assert!((1500..2500).contains(&count), "got {count} mines");
    }
}
