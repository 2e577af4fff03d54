//! The slide engine.
//!
//! A slide compacts every line of the grid toward one edge and merges equal
//! neighbours. All four directions share a single line primitive,
//! [`accumulate`], parameterised only by the scan order that
//! [`Direction::line_position`] defines. A tile merges at most once per slide,
//! so `[2, 2, 2]` becomes `[4, 2]` and `[2, 2, 4]` becomes `[4, 4]`.
//!
//! # Examples
//!
//! ```
//! use twofold_core::{Direction, Grid, slide};
//!
//! let grid: Grid = "2 2 2 2/. . . ./4 . 4 8/. . . .".parse().unwrap();
//! let result = slide::slide(&grid, Direction::Left);
//!
//! assert_eq!(result.grid.to_string(), "4 4 . ./. . . ./8 8 . ./. . . .");
//! assert_eq!(result.score_delta, 16);
//! assert_eq!(result.merges.len(), 3);
//! ```

use crate::{Direction, Grid, Position, Tile};

/// Two tiles that merged into one during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    /// Positions of the merged tiles, the one closer to the leading edge first.
    pub sources: [Position; 2],
    /// Position of the resulting tile.
    pub target: Position,
    /// The resulting (doubled) tile.
    pub tile: Tile,
}

/// A tile that changed position without merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    /// Position before the slide.
    pub from: Position,
    /// Position after the slide.
    pub to: Position,
    /// The moved tile.
    pub tile: Tile,
}

/// The outcome of sliding a grid in one direction.
///
/// `merges` and `moves` describe how tiles travelled, for presentation layers
/// that animate transitions. They are derived data; `grid` alone is the new
/// board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// The grid after the slide.
    pub grid: Grid,
    /// Sum of the values produced by merges.
    pub score_delta: u64,
    /// `true` iff `grid` differs from the input grid.
    pub changed: bool,
    /// Merges in line order, leading edge first.
    pub merges: Vec<MergeEvent>,
    /// Non-merging tiles that moved.
    pub moves: Vec<MoveEvent>,
}

/// One slot of a compacted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Single { tile: Tile, source: Position },
    Merged { tile: Tile, sources: [Position; 2] },
}

impl Slot {
    fn tile(self) -> Tile {
        match self {
            Self::Single { tile, .. } | Self::Merged { tile, .. } => tile,
        }
    }
}

/// Compacts the occupied cells of one line, given leading edge first.
///
/// A slot that already holds a merge result never absorbs another tile.
fn accumulate<I>(cells: I) -> Vec<Slot>
where
    I: IntoIterator<Item = (Position, Tile)>,
{
    let mut slots = Vec::new();
    for (source, tile) in cells {
        if let Some(last) = slots.last_mut()
            && let Slot::Single {
                tile: last_tile,
                source: first,
            } = *last
            && last_tile == tile
        {
            *last = Slot::Merged {
                tile: tile.doubled(),
                sources: [first, source],
            };
        } else {
            slots.push(Slot::Single { tile, source });
        }
    }
    slots
}

/// Slides every tile of `grid` toward `direction`.
///
/// This is a total function: a grid with nothing to move yields an identical
/// grid with `changed == false` and `score_delta == 0`.
///
/// # Examples
///
/// ```
/// use twofold_core::{Direction, Grid, slide};
///
/// let grid: Grid = "2 . 2 4".parse().unwrap();
///
/// let left = slide::slide(&grid, Direction::Left);
/// assert_eq!(left.grid.to_string(), "4 4 . .");
///
/// let right = slide::slide(&grid, Direction::Right);
/// assert_eq!(right.grid.to_string(), ". . 4 4");
///
/// let up = slide::slide(&grid, Direction::Up);
/// assert!(!up.changed);
/// ```
#[must_use]
pub fn slide(grid: &Grid, direction: Direction) -> MoveResult {
    let (width, height) = (grid.width(), grid.height());
    let mut next = grid.cleared();
    let mut score_delta = 0;
    let mut merges = Vec::new();
    let mut moves = Vec::new();

    for line in 0..direction.line_count(width, height) {
        let cells = direction
            .line(line, width, height)
            .filter_map(|position| grid.get(position).map(|tile| (position, tile)));

        for (offset, slot) in (0..).zip(accumulate(cells)) {
            let target = direction.line_position(line, offset, width, height);
            next.place(target, slot.tile());
            match slot {
                Slot::Single { tile, source } => {
                    if source != target {
                        moves.push(MoveEvent {
                            from: source,
                            to: target,
                            tile,
                        });
                    }
                }
                Slot::Merged { tile, sources } => {
                    score_delta += tile.value();
                    merges.push(MergeEvent {
                        sources,
                        target,
                        tile,
                    });
                }
            }
        }
    }

    let changed = next != *grid;
    MoveResult {
        grid: next,
        score_delta,
        changed,
        merges,
        moves,
    }
}

/// Returns `true` if sliding `grid` toward `direction` would change it.
#[must_use]
pub fn can_slide(grid: &Grid, direction: Direction) -> bool {
    slide(grid, direction).changed
}

/// Returns `true` if no direction changes `grid`.
///
/// A full grid is not necessarily stuck: adjacent equal tiles can still merge.
///
/// # Examples
///
/// ```
/// use twofold_core::{Grid, slide};
///
/// let full: Grid = "2 4/4 2".parse().unwrap();
/// assert!(slide::is_stuck(&full));
///
/// let mergeable: Grid = "2 2/4 8".parse().unwrap();
/// assert!(!slide::is_stuck(&mergeable));
/// ```
#[must_use]
pub fn is_stuck(grid: &Grid) -> bool {
    Direction::ALL
        .into_iter()
        .all(|direction| !can_slide(grid, direction))
}
