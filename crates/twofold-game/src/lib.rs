//! Game session management for 2048-style puzzles.
//!
//! A [`Session`] owns the grid, the score, the [`GameStatus`] and the spawn
//! generator. Applying a direction consumes the session and returns its
//! successor: slide, spawn one tile if the grid changed, then re-evaluate the
//! status (won before over).
//!
//! Variant differences between 2048 editions (winning tile, whether play
//! continues after a win, spawn weights) are expressed through
//! [`GameConfig`].
//!
//! # Examples
//!
//! ```
//! use twofold_core::Direction;
//! use twofold_game::{GameConfig, GameStatus, Session};
//! use twofold_spawn::GameSeed;
//!
//! let config = GameConfig::new(4, 4).unwrap();
//! let session = Session::new(config, GameSeed::from_phrase("docs"));
//! assert_eq!(session.grid().occupied_count(), 2);
//! assert_eq!(session.status(), GameStatus::Playing);
//!
//! let session = session
//!     .apply_direction(Direction::Left)
//!     .apply_direction(Direction::Up);
//! assert!(session.score() % 4 == 0);
//! ```

pub use self::{
    config::{AfterWin, ConfigError, GameConfig},
    session::{Session, Turn, TurnOutcome},
    status::GameStatus,
};

mod config;
mod session;
mod status;
