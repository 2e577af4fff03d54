//! Tile value representation.

use std::fmt::{self, Display};

/// A tile value: a power of two greater than or equal to 2.
///
/// The tile stores its exponent, so an invalid value (0, 1, 3, ...) cannot be
/// represented.
///
/// # Examples
///
/// ```
/// use twofold_core::Tile;
///
/// let tile = Tile::from_value(8).unwrap();
/// assert_eq!(tile.exponent(), 3);
/// assert_eq!(tile.doubled().value(), 16);
///
/// assert!(Tile::from_value(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

/// Errors returned when building a [`Tile`] from a raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TileError {
    /// The value is not a power of two of at least 2.
    #[display("tile value {value} is not a power of two of at least 2")]
    InvalidValue {
        /// The rejected value.
        value: u64,
    },
    /// The exponent is outside `1..=63`.
    #[display("tile exponent {exponent} is out of range")]
    InvalidExponent {
        /// The rejected exponent.
        exponent: u8,
    },
}

impl Tile {
    /// The tile with value 2.
    pub const TWO: Self = Self(1);
    /// The tile with value 4.
    pub const FOUR: Self = Self(2);
    /// The largest representable tile (2^63).
    pub const MAX: Self = Self(63);

    /// Creates a tile from its exponent (`value = 2^exponent`).
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidExponent`] unless `exponent` is in `1..=63`.
    pub const fn from_exponent(exponent: u8) -> Result<Self, TileError> {
        if exponent == 0 || exponent > Self::MAX.0 {
            return Err(TileError::InvalidExponent { exponent });
        }
        Ok(Self(exponent))
    }

    /// Creates a tile from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidValue`] if `value` is not a power of two of
    /// at least 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use twofold_core::Tile;
    ///
    /// assert_eq!(Tile::from_value(2), Ok(Tile::TWO));
    /// assert!(Tile::from_value(1).is_err());
    /// assert!(Tile::from_value(0).is_err());
    /// ```
    pub const fn from_value(value: u64) -> Result<Self, TileError> {
        if value < 2 || !value.is_power_of_two() {
            return Err(TileError::InvalidValue { value });
        }
        #[expect(clippy::cast_possible_truncation)]
        let exponent = value.trailing_zeros() as u8;
        Ok(Self(exponent))
    }

    /// Returns the exponent of this tile.
    #[must_use]
    pub const fn exponent(self) -> u8 {
        self.0
    }

    /// Returns the numeric value of this tile.
    #[must_use]
    pub const fn value(self) -> u64 {
        1 << self.0
    }

    /// Returns the tile formed by merging two tiles of this value.
    ///
    /// # Panics
    ///
    /// Panics if this tile is already [`Tile::MAX`].
    #[must_use]
    pub const fn doubled(self) -> Self {
        assert!(self.0 < Self::MAX.0, "tile value overflow");
        Self(self.0 + 1)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Tile> for u64 {
    fn from(tile: Tile) -> u64 {
        tile.value()
    }
}

impl TryFrom<u64> for Tile {
    type Error = TileError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
