use twofold_core::{Direction, Grid, MoveResult, slide};
use twofold_spawn::{GameSeed, Spawn, SpawnRng, SpawnSelector};

use crate::{ConfigError, GameConfig, GameStatus};

/// Number of tiles spawned onto the empty grid when a session starts.
pub(crate) const INITIAL_TILES: usize = 2;

/// A 2048 game session.
///
/// The session is the only mutable aggregate of a game. It owns the grid, the
/// score, the status and the spawn generator, so a session is fully
/// determined by its seed and the directions applied to it.
///
/// Transitions consume the session and return its successor; see
/// [`Session::step`].
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    selector: SpawnSelector,
    seed: GameSeed,
    rng: SpawnRng,
    grid: Grid,
    score: u64,
    status: GameStatus,
    moves: u64,
}

/// The result of applying one direction to a [`Session`].
#[derive(Debug, Clone)]
pub struct Turn {
    /// The session after the turn.
    pub session: Session,
    /// What the turn did.
    pub outcome: TurnOutcome,
}

/// What happened when a direction was applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnOutcome {
    /// The session no longer accepts moves.
    Ignored,
    /// The slide did not change the grid; nothing was spawned.
    Blocked,
    /// The grid changed and one tile was spawned.
    Moved {
        /// The slide, before the spawn was applied.
        result: MoveResult,
        /// The tile spawned after the slide.
        spawn: Spawn,
    },
}

impl Session {
    /// The largest tile sum a session may start from.
    ///
    /// Every move adds at most 4 to the sum, so a session would need more
    /// than 2^60 moves to reach [`Grid::MAX_TOTAL`].
    pub const MAX_START_TOTAL: u64 = Grid::MAX_TOTAL / 2;

    /// Starts a new session: an empty grid with two spawned tiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use twofold_game::{GameConfig, Session};
    /// use twofold_spawn::GameSeed;
    ///
    /// let seed = GameSeed::from_phrase("start");
    /// let a = Session::new(GameConfig::default(), seed);
    /// let b = Session::new(GameConfig::default(), seed);
    /// assert_eq!(a.grid(), b.grid());
    /// assert_eq!(a.score(), 0);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig, seed: GameSeed) -> Self {
        let selector = SpawnSelector::new(config.distribution().clone());
        let mut rng = seed.rng();
        let mut grid = config.empty_grid();
        for spawn in selector.spawn_many(INITIAL_TILES, &grid, &mut rng) {
            spawn.apply(&mut grid);
        }
        log::debug!("new {}x{} session, seed={seed}", config.width(), config.height());

        Self {
            config,
            selector,
            seed,
            rng,
            grid,
            score: 0,
            status: GameStatus::Playing,
            moves: 0,
        }
    }

    /// Resumes a session from an arbitrary grid and score.
    ///
    /// The status is evaluated from `grid`; spawns continue from the start of
    /// `seed`'s sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GridMismatch`] if `grid` does not have the
    /// configured dimensions and [`ConfigError::TotalTooLarge`] if its tiles
    /// sum past [`Session::MAX_START_TOTAL`].
    pub fn from_grid(
        config: GameConfig,
        grid: Grid,
        score: u64,
        seed: GameSeed,
    ) -> Result<Self, ConfigError> {
        config.check_grid(&grid)?;
        let status = GameStatus::evaluate(&config, &grid, false);
        Ok(Self {
            selector: SpawnSelector::new(config.distribution().clone()),
            config,
            seed,
            rng: seed.rng(),
            grid,
            score,
            status,
            moves: 0,
        })
    }

    /// Returns the rules of this session.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the seed this session was started with.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the accumulated score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of moves that changed the grid.
    #[must_use]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Returns `true` if a direction would be considered at all.
    ///
    /// Over sessions never accept input; won sessions accept it only under
    /// [`AfterWin::KeepPlaying`](crate::AfterWin::KeepPlaying).
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        match self.status {
            GameStatus::Playing => true,
            GameStatus::Won => self.config.after_win().is_keep_playing(),
            GameStatus::Over => false,
        }
    }

    /// Applies a direction and reports what happened.
    ///
    /// If the session accepts input and the slide changes the grid, the new
    /// grid is committed, the score increases by the merge total, exactly one
    /// tile is spawned, and the status is re-evaluated (won before over).
    /// Otherwise the session is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use twofold_core::{Direction, Grid, Position, Tile};
    /// use twofold_game::{GameConfig, Session, TurnOutcome};
    /// use twofold_spawn::GameSeed;
    ///
    /// let grid: Grid = "2 2 . ./. . . ./. . . ./. . . .".parse().unwrap();
    /// let session =
    ///     Session::from_grid(GameConfig::default(), grid, 0, GameSeed::from_phrase("step")).unwrap();
    ///
    /// let turn = session.step(Direction::Left);
    /// assert_eq!(turn.session.score(), 4);
    /// assert_eq!(turn.session.grid().get(Position::new(0, 0)), Some(Tile::FOUR));
    /// assert!(matches!(turn.outcome, TurnOutcome::Moved { .. }));
    /// ```
    #[must_use]
    pub fn step(mut self, direction: Direction) -> Turn {
        if !self.accepts_input() {
            log::debug!("ignoring {direction}: game is {}", self.status);
            return Turn {
                session: self,
                outcome: TurnOutcome::Ignored,
            };
        }

        let result = slide::slide(&self.grid, direction);
        if !result.changed {
            log::debug!("{direction} does not change the grid");
            return Turn {
                session: self,
                outcome: TurnOutcome::Blocked,
            };
        }

        // A changed slide always frees or keeps at least one empty cell.
        let mut grid = result.grid.clone();
        let spawn = self.selector.spawn_one(&grid, &mut self.rng);
        spawn.apply(&mut grid);

        let was_won = self.status.is_won();
        self.grid = grid;
        self.score = self.score.saturating_add(result.score_delta);
        self.moves += 1;
        self.status = GameStatus::evaluate(&self.config, &self.grid, was_won);

        log::debug!(
            "move {}: {direction}, +{} (score {}), {} merges",
            self.moves,
            result.score_delta,
            self.score,
            result.merges.len()
        );
        if self.status.is_won() && !was_won {
            log::info!("reached {} after {} moves", self.config.winning_tile(), self.moves);
        } else if self.status.is_over() {
            log::info!("game over with score {}", self.score);
        }

        Turn {
            session: self,
            outcome: TurnOutcome::Moved { result, spawn },
        }
    }

    /// Applies a direction and returns the successor session.
    ///
    /// Equivalent to [`Session::step`] without the outcome.
    #[must_use]
    pub fn apply_direction(self, direction: Direction) -> Self {
        self.step(direction).session
    }

    /// Starts a new session with the same rules.
    #[must_use]
    pub fn restart(&self, seed: GameSeed) -> Self {
        Self::new(self.config.clone(), seed)
    }
}
