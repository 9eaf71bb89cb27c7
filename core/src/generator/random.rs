use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform mine placement without replacement, driven by a caller-supplied seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let total_cells = config.total_cells();
        let (rows, cols) = config.size();

        if config.mines >= total_cells {
            log::warn!(
                "requested {} mines but the grid only holds {} cells, filling it",
                config.mines,
                total_cells
            );
            return MineLayout::from_mine_mask(Array2::from_elem(
                [rows as usize, cols as usize],
                true,
            ));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default([rows as usize, cols as usize]);

        // partial Fisher-Yates over the flat index space: after `mines` swaps the
        // leading slots hold distinct cells drawn uniformly without replacement
        let mut indices: Vec<CellCount> = (0..total_cells).collect();
        for slot in 0..config.mines as usize {
            let pick = rng.random_range(slot..total_cells as usize);
            indices.swap(slot, pick);

            let flat = indices[slot] as usize;
            mine_mask[[flat / cols as usize, flat % cols as usize]] = true;
        }

        log::debug!("placed {} mines on a {rows}x{cols} grid", config.mines);
        MineLayout::from_mine_mask(mine_mask)
    }
}
