//! Random tile spawning for 2048-style puzzles.
//!
//! This crate chooses where new tiles appear and what value they take. It
//! never mutates a grid itself: selectors return [`Spawn`] descriptions that
//! the caller applies.
//!
//! # Overview
//!
//! - [`SpawnSelector`]: picks uniformly among empty cells and draws a tile value
//!   from a [`TileDistribution`]
//! - [`GameSeed`]: 32-byte seed that reproduces a whole spawn sequence through
//!   [`SpawnRng`]
//!
//! # Examples
//!
//! ```
//! use twofold_core::Grid;
//! use twofold_spawn::{GameSeed, SpawnSelector, TileDistribution};
//!
//! let mut rng = GameSeed::from_phrase("example").rng();
//! let selector = SpawnSelector::new(TileDistribution::even());
//!
//! let mut grid = Grid::new(4, 4).unwrap();
//! for spawn in selector.spawn_many(2, &grid, &mut rng) {
//!     spawn.apply(&mut grid);
//! }
//! assert_eq!(grid.occupied_count(), 2);
//! ```

pub use self::{
    distribution::{DistributionError, TileDistribution},
    seed::{GameSeed, SeedParseError, SpawnRng},
    selector::{Spawn, SpawnSelector},
};

mod distribution;
mod seed;
mod selector;
