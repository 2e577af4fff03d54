//! Example playing many games with a random-direction policy.
//!
//! This example shows how to:
//! - Configure a `Session` (board size, winning tile, spawn weights)
//! - Drive it with `Session::step` until it stops accepting input
//! - Reproduce games from derived seeds
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! Play more games on a smaller board with the classic 9:1 spawn weights:
//!
//! ```sh
//! cargo run --example autoplay -- --games 1000 --size 3 --two-weight 9 --four-weight 1
//! ```
//!
//! Every game `i` is seeded with the phrase `"<prefix>-<i>"`, so results are
//! reproducible:
//!
//! ```sh
//! cargo run --example autoplay -- --seed-prefix nightly
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use twofold_core::{Direction, Tile};
use twofold_game::{AfterWin, GameConfig, GameStatus, Session, TurnOutcome};
use twofold_spawn::{GameSeed, TileDistribution};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of games to play.
    #[arg(long, value_name = "COUNT", default_value_t = 200)]
    games: usize,

    /// Board width and height.
    #[arg(long, value_name = "CELLS", default_value_t = 4)]
    size: u8,

    /// Tile value that wins a game.
    #[arg(long, value_name = "VALUE", default_value_t = 2048)]
    winning_tile: u64,

    /// Relative weight of spawning a 2.
    #[arg(long, value_name = "WEIGHT", default_value_t = 1)]
    two_weight: u32,

    /// Relative weight of spawning a 4.
    #[arg(long, value_name = "WEIGHT", default_value_t = 1)]
    four_weight: u32,

    /// Prefix of the per-game seed phrases.
    #[arg(long, value_name = "TEXT", default_value = "autoplay")]
    seed_prefix: String,
}

#[derive(Debug)]
struct GameSummary {
    score: u64,
    moves: u64,
    max_tile: Option<Tile>,
    status: GameStatus,
}

fn main() {
    let args = Args::parse();
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let summaries = (0..args.games)
        .into_par_iter()
        .map(|i| {
            let seed = GameSeed::from_phrase(&format!("{}-{i}", args.seed_prefix));
            play(&config, seed, i)
        })
        .collect::<Vec<_>>();

    print_summary(&config, &summaries);
}

fn build_config(args: &Args) -> Result<GameConfig, String> {
    let winning_tile = Tile::from_value(args.winning_tile).map_err(|e| e.to_string())?;
    let distribution =
        TileDistribution::new(args.two_weight, args.four_weight).map_err(|e| e.to_string())?;
    let config = GameConfig::new(args.size, args.size)
        .map_err(|e| e.to_string())?
        .with_winning_tile(winning_tile)
        .with_after_win(AfterWin::Freeze)
        .with_distribution(distribution);
    Ok(config)
}

/// Cycles through directions, rotating the preference every game so the
/// policy is not identical across games.
fn play(config: &GameConfig, seed: GameSeed, game: usize) -> GameSummary {
    let mut session = Session::new(config.clone(), seed);
    let mut turn_index = game;
    while session.accepts_input() {
        let mut moved = false;
        for offset in 0..Direction::ALL.len() {
            let direction = Direction::ALL[(turn_index + offset) % Direction::ALL.len()];
            let turn = session.step(direction);
            session = turn.session;
            if matches!(turn.outcome, TurnOutcome::Moved { .. }) {
                moved = true;
                break;
            }
        }
        // Unreachable while the session accepts input; guards against spinning.
        if !moved {
            break;
        }
        turn_index += 1;
    }
    GameSummary {
        score: session.score(),
        moves: session.moves(),
        max_tile: session.grid().max_tile(),
        status: session.status(),
    }
}

fn print_summary(config: &GameConfig, summaries: &[GameSummary]) {
    println!("Config:");
    println!("  Board: {}x{}", config.width(), config.height());
    println!("  Winning tile: {}", config.winning_tile());
    let distribution = config.distribution();
    println!(
        "  Spawn weights: 2:{} 4:{} (P(4) = {:.2})",
        distribution.two_weight(),
        distribution.four_weight(),
        distribution.four_probability()
    );
    println!();

    if summaries.is_empty() {
        println!("No games played.");
        return;
    }

    let won = summaries.iter().filter(|s| s.status.is_won()).count();
    let best = summaries.iter().map(|s| s.score).max().unwrap_or_default();
    let total: u64 = summaries.iter().map(|s| s.score).sum();
    let moves: u64 = summaries.iter().map(|s| s.moves).sum();

    println!("Results:");
    println!("  Games: {}", summaries.len());
    println!("  Won: {won}");
    println!("  Best score: {best}");
    println!("  Total score: {total}");
    println!("  Total moves: {moves}");

    let mut tiles = summaries
        .iter()
        .filter_map(|s| s.max_tile)
        .collect::<Vec<_>>();
    tiles.sort_unstable();
    tiles.dedup();
    println!("Max tiles:");
    for tile in tiles.into_iter().rev() {
        let count = summaries
            .iter()
            .filter(|s| s.max_tile == Some(tile))
            .count();
        println!("  {tile}: {count}");
    }
}
