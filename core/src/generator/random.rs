use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Purely random generation from a fixed seed, reproducible across runs.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            placement: Placement::default(),
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_with(config, &mut rng, self.placement)
    }
}

/// Generates a layout with rejection sampling from any random source.
pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<MineLayout> {
    generate_with(config, rng, Placement::Rejection)
}

pub fn generate_with<R: Rng + ?Sized>(
    config: GameConfig,
    rng: &mut R,
    placement: Placement,
) -> Result<MineLayout> {
    let config = config.validate()?;
    let mut mine_mask = Grid::from_elem(config.size(), false);

    match placement {
        Placement::Rejection => {
            if u32::from(config.mines) * 2 > u32::from(config.total_cells()) {
                log::warn!(
                    "Rejection sampling {} mines on {} cells, consider index sampling",
                    config.mines,
                    config.total_cells()
                );
            }

            let mut mines_placed: CellCount = 0;
            while mines_placed < config.mines {
                let coords = (
                    rng.random_range(0..config.width),
                    rng.random_range(0..config.height),
                );
                if !mine_mask[coords] {
                    mine_mask[coords] = true;
                    mines_placed += 1;
                }
            }
        }
        Placement::IndexSample => {
            let height = usize::from(config.height);
            let picks = index::sample(
                rng,
                usize::from(config.total_cells()),
                usize::from(config.mines),
            );
            for i in picks.iter() {
                mine_mask[((i / height) as Coord, (i % height) as Coord)] = true;
            }
        }
    }

    let layout = MineLayout::from_mine_mask(&mine_mask)?;
    log::debug!(
        "Generated {}x{} layout with {} mines",
        config.width,
        config.height,
        layout.mine_count()
    );
    Ok(layout)
}
