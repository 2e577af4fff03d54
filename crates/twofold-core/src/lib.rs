//! Core data structures and the slide engine for 2048-style puzzles.
//!
//! This crate provides the board model shared by spawning, game management and
//! presentation components. It contains no randomness: every operation here is
//! a pure, terminating computation over a bounded grid.
//!
//! # Overview
//!
//! - [`position`]: Board coordinates (column, row), ordered row-major
//! - [`tile`]: Power-of-two tile values stored as exponents
//! - [`direction`]: The four slide directions and their line geometry
//! - [`grid`]: Sparse board mapping positions to tiles
//! - [`slide`]: The compaction-and-merge transformation
//!
//! # Examples
//!
//! ```
//! use twofold_core::{Direction, Grid, Position, Tile, slide};
//!
//! let grid: Grid = "2 2 . ./. . . ./. . . ./. . . .".parse().unwrap();
//! let result = slide::slide(&grid, Direction::Left);
//!
//! assert!(result.changed);
//! assert_eq!(result.score_delta, 4);
//! assert_eq!(result.grid.get(Position::new(0, 0)), Some(Tile::FOUR));
//! ```

pub mod direction;
pub mod grid;
pub mod position;
pub mod slide;
pub mod tile;

// Re-export commonly used types
pub use self::{
    direction::Direction,
    grid::{Grid, GridError},
    position::Position,
    slide::{MergeEvent, MoveEvent, MoveResult},
    tile::{Tile, TileError},
};
