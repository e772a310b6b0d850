use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Draws distinct random elements from a collection. Never returns a partial
/// sample: asking for more elements than exist is an error.
pub trait Sampler {
    /// Draws `count` distinct indices out of `0..population`, in no
    /// particular order.
    fn sample_indices(&mut self, population: usize, count: usize) -> Result<Vec<usize>>;

    /// Draws `count` distinct elements, consuming the input.
    fn pick<T>(&mut self, items: Vec<T>, count: usize) -> Result<Vec<T>> {
        let indices = self.sample_indices(items.len(), count)?;
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        Ok(indices
            .into_iter()
            .map(|index| slots[index].take().expect("sampled indices are distinct"))
            .collect())
    }
}

/// Seeded sampler performing a partial Fisher–Yates shuffle over the index
/// range. Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn sample_indices(&mut self, population: usize, count: usize) -> Result<Vec<usize>> {
        if count > population {
            log::warn!(
                "sample of {} requested from a population of {}",
                count,
                population
            );
            return Err(GameError::NotEnoughItems);
        }

        let mut indices: Vec<usize> = (0..population).collect();
        for slot in 0..count {
            let pick = self.rng.random_range(slot..population);
            indices.swap(slot, pick);
        }
        indices.truncate(count);
        Ok(indices)
    }
}
