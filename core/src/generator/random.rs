use ndarray::Array2;

use super::*;

/// Uniform rejection sampler: keeps drawing random coordinates and discards
/// the ones already mined until the requested count is placed. Cheap while
/// mine density is low; `GameConfig::validate` guarantees at least one free
/// cell so the loop terminates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut mine_coords = Vec::with_capacity(config.mines.into());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        while mine_coords.len() < usize::from(config.mines) {
            let pos = (
                rng.random_range(0..config.rows),
                rng.random_range(0..config.cols),
            );
            if mine_mask[pos.to_nd_index()] {
                continue;
            }
            mine_mask[pos.to_nd_index()] = true;
            mine_coords.push(pos);
        }

        log::debug!(
            "placed {} mines on a {}x{} board (seed {})",
            mine_coords.len(),
            config.rows,
            config.cols,
            self.seed
        );
        MineLayout::from_parts(mine_mask, mine_coords)
    }
}
