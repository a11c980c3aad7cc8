use alloc::collections::BTreeSet;

use super::*;

/// Uniformly random placement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        let config = GameConfig::new(config.size, config.mines)?;
        let (_, cols) = config.size;
        let total_cells = usize::from(config.total_cells());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        // row-major: index = row * cols + col
        let mines: BTreeSet<Coord2> =
            rand::seq::index::sample(&mut rng, total_cells, config.mines.into())
                .into_iter()
                .map(|index| {
                    let (row, col) = (index / usize::from(cols), index % usize::from(cols));
                    (row as Coord, col as Coord)
                })
                .collect();

        log::debug!(
            "Placed {} random mines on {:?} with seed {}",
            mines.len(),
            config.size,
            self.seed
        );
        Ok(Board::from_mine_set(config.size, mines))
    }
}
