use twofold_core::{Grid, slide};

use crate::GameConfig;

/// Progress of a game session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum GameStatus {
    /// Moves are accepted and no terminal condition holds.
    #[display("playing")]
    Playing,
    /// A tile reached the winning value.
    #[display("won")]
    Won,
    /// The grid is full and no direction changes it.
    #[display("over")]
    Over,
}

impl GameStatus {
    /// Evaluates the status of `grid`.
    ///
    /// The winning check runs before the stuck check, so a grid that is both
    /// winning and stuck reports [`GameStatus::Won`] the first time. A session
    /// that has already won (`was_won`) and keeps playing ends with
    /// [`GameStatus::Over`] once stuck.
    pub(crate) fn evaluate(config: &GameConfig, grid: &Grid, was_won: bool) -> Self {
        let won = grid
            .max_tile()
            .is_some_and(|tile| tile >= config.winning_tile());
        if won && !was_won {
            return Self::Won;
        }
        if grid.is_full() && slide::is_stuck(grid) {
            return Self::Over;
        }
        if won || was_won {
            Self::Won
        } else {
            Self::Playing
        }
    }
}
