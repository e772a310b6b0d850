#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use layout::*;
pub use sampler::*;

mod board;
mod clue;
mod error;
mod layout;
mod sampler;

/// Board coordinates `(category column, clue row)`.
pub type CellPos = (usize, usize);

/// Fixed shape of a game: how many category columns, how many clue rows per
/// column, and how large a candidate pool the source is asked for before
/// sampling the columns down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: usize,
    pub clues_per_category: usize,
    pub candidate_pool: usize,
}

impl GameConfig {
    pub const fn new_unchecked(
        categories: usize,
        clues_per_category: usize,
        candidate_pool: usize,
    ) -> Self {
        Self {
            categories,
            clues_per_category,
            candidate_pool,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize, candidate_pool: usize) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let candidate_pool = candidate_pool.max(categories);
        Self::new_unchecked(categories, clues_per_category, candidate_pool)
    }

    pub const fn total_cells(&self) -> usize {
        self.categories.saturating_mul(self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(6, 5, 100)
    }
}
