//! Slide directions and the line geometry they induce.

use crate::Position;

/// A direction in which all tiles slide.
///
/// Each direction partitions the board into independent lines (rows for
/// [`Left`]/[`Right`], columns for [`Up`]/[`Down`]). Within a line, offsets are
/// counted from the *leading edge*, the edge the tiles move toward.
///
/// [`Left`]: Direction::Left
/// [`Right`]: Direction::Right
/// [`Up`]: Direction::Up
/// [`Down`]: Direction::Down
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Direction {
    /// Towards column 0.
    #[display("left")]
    Left,
    /// Towards the last column.
    #[display("right")]
    Right,
    /// Towards row 0.
    #[display("up")]
    Up,
    /// Towards the last row.
    #[display("down")]
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns `true` for [`Direction::Left`] and [`Direction::Right`].
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Returns the number of independent lines on a `width` × `height` board.
    #[must_use]
    pub const fn line_count(self, width: u8, height: u8) -> u8 {
        if self.is_horizontal() { height } else { width }
    }

    /// Returns the number of cells in each line on a `width` × `height` board.
    #[must_use]
    pub const fn line_len(self, width: u8, height: u8) -> u8 {
        if self.is_horizontal() { width } else { height }
    }

    /// Maps a line index and an offset from the leading edge to a board position.
    ///
    /// # Examples
    ///
    /// ```
    /// use twofold_core::{Direction, Position};
    ///
    /// // Offset 0 is always on the edge the tiles move toward.
    /// assert_eq!(Direction::Left.line_position(1, 0, 4, 4), Position::new(0, 1));
    /// assert_eq!(Direction::Right.line_position(1, 0, 4, 4), Position::new(3, 1));
    /// assert_eq!(Direction::Up.line_position(2, 1, 4, 4), Position::new(2, 1));
    /// assert_eq!(Direction::Down.line_position(2, 1, 4, 4), Position::new(2, 2));
    /// ```
    #[must_use]
    pub const fn line_position(self, line: u8, offset: u8, width: u8, height: u8) -> Position {
        match self {
            Self::Left => Position::new(offset, line),
            Self::Right => Position::new(width - 1 - offset, line),
            Self::Up => Position::new(line, offset),
            Self::Down => Position::new(line, height - 1 - offset),
        }
    }

    /// Returns an iterator over the positions of one line, leading edge first.
    pub fn line(self, line: u8, width: u8, height: u8) -> impl Iterator<Item = Position> {
        (0..self.line_len(width, height))
            .map(move |offset| self.line_position(line, offset, width, height))
    }
}
