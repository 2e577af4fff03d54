use twofold_core::{Grid, GridError, Tile};
use twofold_spawn::TileDistribution;

use crate::{Session, session::INITIAL_TILES};

/// What happens to input once a tile reaches the winning value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AfterWin {
    /// The session stops accepting moves.
    #[default]
    Freeze,
    /// Moves keep being applied; the session ends when the grid is stuck.
    KeepPlaying,
}

/// Errors returned when building a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    /// The board dimensions are unsupported.
    #[display("{_0}")]
    #[from]
    Grid(GridError),
    /// The board cannot hold the starting tiles.
    #[display("a {width}x{height} board cannot hold the starting tiles")]
    TooFewCells {
        /// Requested width.
        width: u8,
        /// Requested height.
        height: u8,
    },
    /// A grid does not match the configured dimensions.
    #[display("expected a {expected_width}x{expected_height} grid, got {width}x{height}")]
    GridMismatch {
        /// Configured width.
        expected_width: u8,
        /// Configured height.
        expected_height: u8,
        /// Width of the supplied grid.
        width: u8,
        /// Height of the supplied grid.
        height: u8,
    },
    /// A grid's tile values leave too little room for further spawns.
    #[display("a grid whose tiles sum to {total} cannot start a session")]
    TotalTooLarge {
        /// Sum of the grid's tile values.
        total: u64,
    },
}

/// Rules of a game session.
///
/// # Examples
///
/// ```
/// use twofold_core::Tile;
/// use twofold_game::{AfterWin, GameConfig};
/// use twofold_spawn::TileDistribution;
///
/// let config = GameConfig::new(4, 4)
///     .unwrap()
///     .with_winning_tile(Tile::from_value(64).unwrap())
///     .with_after_win(AfterWin::KeepPlaying)
///     .with_distribution(TileDistribution::classic());
///
/// assert_eq!(config.winning_tile().value(), 64);
/// assert!(config.after_win().is_keep_playing());
///
/// assert!(GameConfig::new(0, 4).is_err());
/// assert!(GameConfig::new(1, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    empty_grid: Grid,
    winning_tile: Tile,
    after_win: AfterWin,
    distribution: TileDistribution,
}

impl GameConfig {
    /// The default winning tile, 2048.
    pub const DEFAULT_WINNING_TILE: Tile = match Tile::from_exponent(11) {
        Ok(tile) => tile,
        Err(_) => panic!("2048 is a valid tile"),
    };

    /// Creates a configuration for a `width` × `height` board with default rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Grid`] for unsupported dimensions and
    /// [`ConfigError::TooFewCells`] if the board cannot hold the starting tiles.
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        let empty_grid = Grid::new(width, height)?;
        if empty_grid.cell_count() < INITIAL_TILES {
            return Err(ConfigError::TooFewCells { width, height });
        }
        Ok(Self {
            empty_grid,
            winning_tile: Self::DEFAULT_WINNING_TILE,
            after_win: AfterWin::default(),
            distribution: TileDistribution::default(),
        })
    }

    /// Sets the tile value that wins the game.
    #[must_use]
    pub fn with_winning_tile(self, winning_tile: Tile) -> Self {
        Self {
            winning_tile,
            ..self
        }
    }

    /// Sets whether moves are accepted after a win.
    #[must_use]
    pub fn with_after_win(self, after_win: AfterWin) -> Self {
        Self { after_win, ..self }
    }

    /// Sets the value distribution of spawned tiles.
    #[must_use]
    pub fn with_distribution(self, distribution: TileDistribution) -> Self {
        Self {
            distribution,
            ..self
        }
    }

    /// Returns the board width.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.empty_grid.width()
    }

    /// Returns the board height.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.empty_grid.height()
    }

    /// Returns the tile value that wins the game.
    #[must_use]
    pub fn winning_tile(&self) -> Tile {
        self.winning_tile
    }

    /// Returns the after-win policy.
    #[must_use]
    pub fn after_win(&self) -> AfterWin {
        self.after_win
    }

    /// Returns the value distribution of spawned tiles.
    #[must_use]
    pub fn distribution(&self) -> &TileDistribution {
        &self.distribution
    }

    /// Returns an empty grid of the configured size.
    #[must_use]
    pub fn empty_grid(&self) -> Grid {
        self.empty_grid.clone()
    }

    pub(crate) fn check_grid(&self, grid: &Grid) -> Result<(), ConfigError> {
        if grid.width() != self.width() || grid.height() != self.height() {
            return Err(ConfigError::GridMismatch {
                expected_width: self.width(),
                expected_height: self.height(),
                width: grid.width(),
                height: grid.height(),
            });
        }
        if grid.total() > Session::MAX_START_TOTAL {
            return Err(ConfigError::TotalTooLarge {
                total: grid.total(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, 4).expect("4x4 is a valid board")
    }
}

#[cfg(test)]
mod tests {
    use twofold_core::Position;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!((config.width(), config.height()), (4, 4));
        assert_eq!(config.winning_tile().value(), 2048);
        assert_eq!(config.after_win(), AfterWin::Freeze);
        assert_eq!(config.distribution(), &TileDistribution::even());
        assert!(config.empty_grid().is_empty());
    }

    #[test]
    fn test_rejects_invalid_sizes() {
        assert!(matches!(
            GameConfig::new(0, 4),
            Err(ConfigError::Grid(GridError::InvalidDimensions { .. }))
        ));
        assert!(matches!(
            GameConfig::new(4, Grid::MAX_DIMENSION + 1),
            Err(ConfigError::Grid(_))
        ));
        assert_eq!(
            GameConfig::new(1, 1),
            Err(ConfigError::TooFewCells {
                width: 1,
                height: 1
            })
        );
        assert!(GameConfig::new(1, 2).is_ok());
    }

    #[test]
    fn test_check_grid() {
        let config = GameConfig::new(3, 2).unwrap();
        assert!(config.check_grid(&Grid::new(3, 2).unwrap()).is_ok());
        assert_eq!(
            config.check_grid(&Grid::new(2, 3).unwrap()),
            Err(ConfigError::GridMismatch {
                expected_width: 3,
                expected_height: 2,
                width: 2,
                height: 3,
            })
        );
    }

    #[test]
    fn test_check_grid_leaves_room_for_spawns() {
        let config = GameConfig::new(2, 1).unwrap();
        let at_limit = Grid::from_tiles(
            2,
            1,
            [(
                Position::new(0, 0),
                Tile::from_value(Session::MAX_START_TOTAL).unwrap(),
            )],
        )
        .unwrap();
        assert!(config.check_grid(&at_limit).is_ok());

        let past_limit: Grid = "4611686018427387904 2".parse().unwrap();
        assert_eq!(
            config.check_grid(&past_limit),
            Err(ConfigError::TotalTooLarge {
                total: Session::MAX_START_TOTAL + 2
            })
        );
    }

    #[test]
    fn test_grid_errors_convert() {
        let error: ConfigError = GridError::TotalTooLarge.into();
        assert_eq!(error, ConfigError::Grid(GridError::TotalTooLarge));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::TooFewCells {
                width: 1,
                height: 1
            }
            .to_string(),
            "a 1x1 board cannot hold the starting tiles"
        );
    }
}
