use twofold_core::Tile;
use twofold_game::{AfterWin, ConfigError, GameConfig};
use twofold_spawn::TileDistribution;

/// Spawn value weights selectable from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DistributionKind {
    /// 2 and 4 equally likely.
    #[default]
    Even,
    /// 2 nine times as likely as 4.
    Classic,
}

impl DistributionKind {
    #[must_use]
    pub fn distribution(self) -> TileDistribution {
        match self {
            Self::Even => TileDistribution::even(),
            Self::Classic => TileDistribution::classic(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub width: u8,
    pub height: u8,
    pub winning_tile: Tile,
    pub after_win: AfterWin,
    pub distribution: DistributionKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            winning_tile: GameConfig::DEFAULT_WINNING_TILE,
            after_win: AfterWin::default(),
            distribution: DistributionKind::default(),
        }
    }
}

impl Settings {
    pub fn to_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig::new(self.width, self.height)?
            .with_winning_tile(self.winning_tile)
            .with_after_win(self.after_win)
            .with_distribution(self.distribution.distribution());
        Ok(config)
    }
}
