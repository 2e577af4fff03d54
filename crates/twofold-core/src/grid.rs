//! Sparse board representation.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Position, Tile, TileError};

/// A fixed-size board mapping positions to tiles.
///
/// Only occupied cells are stored. The board maintains these invariants:
///
/// - every occupied position lies within `[0, width) × [0, height)`;
/// - each position holds at most one tile;
/// - every value is a power of two of at least 2 (guaranteed by [`Tile`]);
/// - the values sum to at most [`Grid::MAX_TOTAL`].
///
/// A slide never changes the sum, so every merge result is itself at most
/// [`Grid::MAX_TOTAL`] and therefore a valid [`Tile`].
///
/// # Text format
///
/// Grids can be parsed from and formatted to a compact text form: rows are
/// separated by `/` (newlines are also accepted when parsing), cells by
/// whitespace, and `.` or `0` marks an empty cell.
///
/// # Examples
///
/// ```
/// use twofold_core::{Grid, Position, Tile};
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.place(Position::new(1, 0), Tile::TWO);
/// grid.place(Position::new(3, 2), Tile::FOUR);
///
/// assert_eq!(grid.occupied_count(), 2);
/// assert_eq!(grid.to_string(), ". 2 . ./. . . ./. . . 4/. . . .");
///
/// let parsed: Grid = ". 2 . ./. . . ./. . . 4/. . . .".parse().unwrap();
/// assert_eq!(parsed, grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    tiles: BTreeMap<Position, Tile>,
}

/// Errors returned when building or parsing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GridError {
    /// Width or height is outside `1..=Grid::MAX_DIMENSION`.
    #[display("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A tile position lies outside the grid.
    #[display("position {position} is outside the grid")]
    OutOfBounds {
        /// The offending position.
        position: Position,
    },
    /// Two tiles were given for the same position.
    #[display("position {position} is occupied more than once")]
    DuplicatePosition {
        /// The offending position.
        position: Position,
    },
    /// A row has a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        found: usize,
    },
    /// A cell token is neither an empty marker nor a number.
    #[display("invalid cell {token:?}")]
    InvalidToken {
        /// The unparsable token.
        token: String,
    },
    /// The tile values sum past [`Grid::MAX_TOTAL`].
    #[display("tile values sum past {}", Grid::MAX_TOTAL)]
    TotalTooLarge,
    /// A cell holds a number that is not a valid tile value.
    #[display("{_0}")]
    #[from]
    InvalidTile(TileError),
}

impl Grid {
    /// The largest supported width or height.
    pub const MAX_DIMENSION: u8 = 8;

    /// The largest supported sum of tile values.
    pub const MAX_TOTAL: u64 = Tile::MAX.value();

    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] unless both `width` and `height`
    /// are in `1..=Grid::MAX_DIMENSION`.
    pub fn new(width: u8, height: u8) -> Result<Self, GridError> {
        if !(1..=Self::MAX_DIMENSION).contains(&width)
            || !(1..=Self::MAX_DIMENSION).contains(&height)
        {
            return Err(GridError::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles: BTreeMap::new(),
        })
    }

    /// Creates a grid from a list of occupied cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] for unsupported dimensions,
    /// [`GridError::OutOfBounds`] if a position lies outside the grid,
    /// [`GridError::DuplicatePosition`] if a position appears twice, and
    /// [`GridError::TotalTooLarge`] if the values sum past [`Grid::MAX_TOTAL`].
    pub fn from_tiles<I>(width: u8, height: u8, tiles: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Position, Tile)>,
    {
        let mut grid = Self::new(width, height)?;
        let mut total = 0_u64;
        for (position, tile) in tiles {
            if !grid.contains(position) {
                return Err(GridError::OutOfBounds { position });
            }
            total = total
                .checked_add(tile.value())
                .filter(|&total| total <= Self::MAX_TOTAL)
                .ok_or(GridError::TotalTooLarge)?;
            if grid.tiles.insert(position, tile).is_some() {
                return Err(GridError::DuplicatePosition { position });
            }
        }
        Ok(grid)
    }

    /// Returns an empty grid with the same dimensions.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            tiles: BTreeMap::new(),
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns `true` if `position` lies within the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.is_within(self.width, self.height)
    }

    /// Returns the tile at `position`, if any.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Tile> {
        self.tiles.get(&position).copied()
    }

    /// Places a tile, returning the tile previously at that position.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the grid, or if the values would sum
    /// past [`Grid::MAX_TOTAL`].
    pub fn place(&mut self, position: Position, tile: Tile) -> Option<Tile> {
        assert!(
            self.contains(position),
            "position {position} is outside the {}x{} grid",
            self.width,
            self.height
        );
        let remaining = self.total() - self.get(position).map_or(0, Tile::value);
        assert!(
            tile.value() <= Self::MAX_TOTAL - remaining,
            "placing {tile} at {position} sums past {}",
            Self::MAX_TOTAL
        );
        self.tiles.insert(position, tile)
    }

    /// Returns `true` if `tile` fits on an empty cell without the values
    /// summing past [`Grid::MAX_TOTAL`].
    #[must_use]
    pub fn has_room_for(&self, tile: Tile) -> bool {
        tile.value() <= Self::MAX_TOTAL - self.total()
    }

    /// Removes and returns the tile at `position`, if any.
    pub fn remove(&mut self, position: Position) -> Option<Tile> {
        self.tiles.remove(&position)
    }

    /// Returns an iterator over occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles.iter().map(|(&position, &tile)| (position, tile))
    }

    /// Returns an iterator over every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Returns an iterator over unoccupied positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(|position| !self.tiles.contains_key(position))
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the number of unoccupied cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cell_count() - self.tiles.len()
    }

    /// Returns `true` if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns `true` if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() == self.cell_count()
    }

    /// Returns the largest tile on the grid.
    #[must_use]
    pub fn max_tile(&self) -> Option<Tile> {
        self.tiles.values().max().copied()
    }

    /// Returns the sum of all tile values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.tiles.values().map(|tile| tile.value()).sum()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("/")?;
            }
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(tile) => write!(f, "{tile}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| row.split_whitespace().map(parse_cell).collect())
            .collect::<Result<Vec<Vec<_>>, _>>()?;

        let width = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        let invalid = || GridError::InvalidDimensions {
            width,
            height: rows.len(),
        };
        let width = u8::try_from(width).map_err(|_| invalid())?;
        let height = u8::try_from(rows.len()).map_err(|_| invalid())?;
        let tiles = (0..height).zip(&rows).flat_map(|(y, cells)| {
            (0..width)
                .zip(cells)
                .filter_map(move |(x, cell)| cell.map(|tile| (Position::new(x, y), tile)))
        });
        Self::from_tiles(width, height, tiles)
    }
}

fn parse_cell(token: &str) -> Result<Option<Tile>, GridError> {
    if token == "." {
        return Ok(None);
    }
    let value = token.parse::<u64>().map_err(|_| GridError::InvalidToken {
        token: token.to_owned(),
    })?;
    if value == 0 {
        return Ok(None);
    }
    Ok(Some(Tile::from_value(value)?))
}
