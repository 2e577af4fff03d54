//! Board position representation.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// A position on the board, identified by column `x` and row `y`.
///
/// Positions are ordered row-major (by `y`, then by `x`), so iterating a
/// sorted collection of positions visits them in reading order.
///
/// # Examples
///
/// ```
/// use twofold_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 1);
///
/// assert!(Position::new(3, 0) < Position::new(0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position from a column and a row.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column (x coordinate).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (y coordinate).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns `true` if this position lies inside a `width` × `height` board.
    #[must_use]
    pub const fn is_within(self, width: u8, height: u8) -> bool {
        self.x < width && self.y < height
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_ordering() {
        let mut positions = vec![
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(3, 0),
            Position::new(0, 0),
        ];
        positions.sort();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(3, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_is_within() {
        assert!(Position::new(0, 0).is_within(4, 4));
        assert!(Position::new(3, 3).is_within(4, 4));
        assert!(!Position::new(4, 0).is_within(4, 4));
        assert!(!Position::new(0, 2).is_within(4, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }
}
