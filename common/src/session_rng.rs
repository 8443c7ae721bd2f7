use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seedable random source handed to the move selector. The seed is kept so a
/// game can be replayed with the same random choices.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from `cells`, `None` when there is nothing to pick.
    pub fn choose(&mut self, cells: &[usize]) -> Option<usize> {
        cells.choose(&mut self.rng).copied()
    }
}
