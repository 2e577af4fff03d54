use rand::{
    Rng,
    seq::{IndexedRandom as _, index},
};
use twofold_core::{Grid, Position, Tile};

use crate::TileDistribution;

/// A tile to be placed on an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    /// Where the tile appears.
    pub position: Position,
    /// The value of the new tile.
    pub tile: Tile,
}

impl Spawn {
    /// Places this tile on `grid`.
    ///
    /// # Panics
    ///
    /// Panics if the target cell is already occupied or out of bounds.
    pub fn apply(self, grid: &mut Grid) {
        let previous = grid.place(self.position, self.tile);
        assert!(
            previous.is_none(),
            "spawned onto occupied cell {}",
            self.position
        );
    }
}

/// Chooses positions and values for new tiles.
///
/// Positions are uniform over the empty cells of the grid; values are drawn
/// independently from the configured [`TileDistribution`].
///
/// Invoking a selector on a grid without enough empty cells is a contract
/// violation and panics. Callers check occupancy (or whether the preceding
/// slide changed the grid) first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnSelector {
    distribution: TileDistribution,
}

impl SpawnSelector {
    /// Creates a selector drawing values from `distribution`.
    #[must_use]
    pub fn new(distribution: TileDistribution) -> Self {
        Self { distribution }
    }

    /// Returns the value distribution.
    #[must_use]
    pub fn distribution(&self) -> &TileDistribution {
        &self.distribution
    }

    /// Chooses one empty cell and a value for it.
    ///
    /// # Panics
    ///
    /// Panics if `grid` is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use twofold_core::{Grid, Position};
    /// use twofold_spawn::{GameSeed, SpawnSelector};
    ///
    /// let grid: Grid = "2 4/. 8".parse().unwrap();
    /// let mut rng = GameSeed::from_phrase("one").rng();
    ///
    /// let spawn = SpawnSelector::default().spawn_one(&grid, &mut rng);
    /// assert_eq!(spawn.position, Position::new(0, 1));
    /// assert!(spawn.tile.value() == 2 || spawn.tile.value() == 4);
    /// ```
    pub fn spawn_one<R>(&self, grid: &Grid, rng: &mut R) -> Spawn
    where
        R: Rng + ?Sized,
    {
        let empty = grid.empty_positions().collect::<Vec<_>>();
        let Some(&position) = empty.choose(rng) else {
            panic!("cannot spawn a tile on a full grid");
        };
        let spawn = Spawn {
            position,
            tile: self.distribution.sample(rng),
        };
        log::trace!("spawn {} at {}", spawn.tile, spawn.position);
        spawn
    }

    /// Chooses `count` distinct empty cells and a value for each.
    ///
    /// Positions are sampled without replacement; the order of the returned
    /// spawns carries no meaning beyond display order.
    ///
    /// # Panics
    ///
    /// Panics if `grid` has fewer than `count` empty cells.
    pub fn spawn_many<R>(&self, count: usize, grid: &Grid, rng: &mut R) -> Vec<Spawn>
    where
        R: Rng + ?Sized,
    {
        let empty = grid.empty_positions().collect::<Vec<_>>();
        assert!(
            count <= empty.len(),
            "cannot spawn {count} tiles into {} empty cells",
            empty.len()
        );
        let indices = index::sample(rng, empty.len(), count);
        let spawns = indices
            .into_iter()
            .map(|i| Spawn {
                position: empty[i],
                tile: self.distribution.sample(rng),
            })
            .collect::<Vec<_>>();
        log::trace!("spawned {} tiles", spawns.len());
        spawns
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use proptest::prelude::*;
    use rand::SeedableRng as _;

    use super::*;
    use crate::SpawnRng;

    fn grid(s: &str) -> Grid {
        s.parse().expect("valid grid")
    }

    #[test]
    fn test_spawn_one_uniform_over_empty_cells() {
        let grid = grid("2 . . ./. 4 . ./. . 8 ./. . . 16");
        let selector = SpawnSelector::default();
        let mut rng = SpawnRng::seed_from_u64(42);

        let trials = 60_000;
        let mut counts = BTreeMap::new();
        for _ in 0..trials {
            let spawn = selector.spawn_one(&grid, &mut rng);
            assert_eq!(grid.get(spawn.position), None);
            assert!(spawn.tile == Tile::TWO || spawn.tile == Tile::FOUR);
            *counts.entry(spawn.position).or_insert(0_u32) += 1;
        }

        // 12 empty cells, 5000 expected hits each.
        assert_eq!(counts.len(), 12);
        for (position, count) in counts {
            assert!((4_500..5_500).contains(&count), "{position}: {count}");
        }
    }

    #[test]
    fn test_spawn_one_single_empty_cell() {
        let grid = grid("2 4 8/16 . 32");
        let mut rng = SpawnRng::seed_from_u64(3);
        for _ in 0..20 {
            let spawn = SpawnSelector::default().spawn_one(&grid, &mut rng);
            assert_eq!(spawn.position, Position::new(1, 1));
        }
    }

    #[test]
    #[should_panic(expected = "cannot spawn a tile on a full grid")]
    fn test_spawn_one_full_grid_panics() {
        let grid = grid("2 4/4 2");
        let mut rng = SpawnRng::seed_from_u64(0);
        let _ = SpawnSelector::default().spawn_one(&grid, &mut rng);
    }

    #[test]
    #[should_panic(expected = "cannot spawn 3 tiles into 2 empty cells")]
    fn test_spawn_many_too_many_panics() {
        let grid = grid("2 ./. 4");
        let mut rng = SpawnRng::seed_from_u64(0);
        let _ = SpawnSelector::default().spawn_many(3, &grid, &mut rng);
    }

    #[test]
    fn test_spawn_many_fills_exactly() {
        let grid = grid(". ./. 4");
        let mut rng = SpawnRng::seed_from_u64(5);
        let spawns = SpawnSelector::default().spawn_many(3, &grid, &mut rng);
        let positions: BTreeSet<_> = spawns.iter().map(|spawn| spawn.position).collect();
        assert_eq!(
            positions,
            BTreeSet::from([Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)])
        );
    }

    #[test]
    fn test_apply() {
        let mut grid = Grid::new(2, 2).unwrap();
        Spawn {
            position: Position::new(1, 1),
            tile: Tile::FOUR,
        }
        .apply(&mut grid);
        assert_eq!(grid.get(Position::new(1, 1)), Some(Tile::FOUR));
    }

    #[test]
    #[should_panic(expected = "spawned onto occupied cell (0, 0)")]
    fn test_apply_occupied_panics() {
        let mut grid = grid("2 ./. .");
        Spawn {
            position: Position::new(0, 0),
            tile: Tile::TWO,
        }
        .apply(&mut grid);
    }

    proptest! {
        #[test]
        fn prop_spawn_many_distinct_and_empty(
            occupied in prop::collection::vec(any::<bool>(), 16),
            count in 0usize..=16,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(4, 4).unwrap();
            let positions = grid.positions().collect::<Vec<_>>();
            for (position, occupied) in positions.into_iter().zip(occupied) {
                if occupied {
                    grid.place(position, Tile::TWO);
                }
            }
            let count = count.min(grid.empty_count());

            let mut rng = SpawnRng::seed_from_u64(seed);
            let spawns = SpawnSelector::default().spawn_many(count, &grid, &mut rng);
            prop_assert_eq!(spawns.len(), count);

            let mut next = grid.clone();
            for spawn in &spawns {
                prop_assert_eq!(grid.get(spawn.position), None);
                // `apply` panics on a repeated position.
                spawn.apply(&mut next);
            }
            prop_assert_eq!(next.occupied_count(), grid.occupied_count() + count);
        }
    }
}
