//! Twofold terminal game.
//!
//! Reads keys from standard input one line at a time and prints the board
//! after every line.
//!
//! # Usage
//!
//! ```sh
//! twofold --width 5 --height 5 --distribution classic
//! twofold --seed-phrase "daily challenge" --keep-playing
//! ```

use std::{
    io::{self, BufRead as _, Write as _},
    process,
};

use clap::Parser;
use twofold_app::{
    action::ActionRequestQueue,
    app::TwofoldApp,
    input, render,
    settings::{DistributionKind, Settings},
    version,
};
use twofold_core::Tile;
use twofold_game::{AfterWin, Session};
use twofold_spawn::GameSeed;

const HELP_LINE: &str = "Move with w/a/s/d, h/j/k/l or arrow names; n: new game, q: quit";

#[derive(Debug, Parser)]
#[command(about, disable_version_flag = true)]
struct Args {
    /// Board width.
    #[arg(long, value_name = "CELLS", default_value_t = 4)]
    width: u8,

    /// Board height.
    #[arg(long, value_name = "CELLS", default_value_t = 4)]
    height: u8,

    /// Tile value that wins the game.
    #[arg(long, value_name = "VALUE", default_value = "2048", value_parser = parse_tile)]
    winning_tile: Tile,

    /// Keep accepting moves after the winning tile appears.
    #[arg(long)]
    keep_playing: bool,

    /// Spawn value weights.
    #[arg(long, value_name = "KIND", default_value = "even")]
    distribution: DistributionKind,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    seed: Option<GameSeed>,

    /// Seed derived from a phrase.
    #[arg(long, value_name = "TEXT")]
    seed_phrase: Option<String>,

    /// Print version.
    #[arg(short = 'V', long)]
    version: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            height: self.height,
            winning_tile: self.winning_tile,
            after_win: if self.keep_playing {
                AfterWin::KeepPlaying
            } else {
                AfterWin::Freeze
            },
            distribution: self.distribution,
        }
    }

    fn seed(&self) -> GameSeed {
        match (self.seed, &self.seed_phrase) {
            (Some(seed), _) => seed,
            (None, Some(phrase)) => GameSeed::from_phrase(phrase),
            (None, None) => GameSeed::random(),
        }
    }
}

fn parse_tile(s: &str) -> Result<Tile, String> {
    let value = s.parse::<u64>().map_err(|e| e.to_string())?;
    Tile::from_value(value).map_err(|e| e.to_string())
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.version {
        println!("twofold {}", version::build_version());
        return;
    }
    log::info!("Starting Twofold, version={}", version::build_version());

    let config = match args.settings().to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    let mut app = TwofoldApp::new(Session::new(config, args.seed()));
    if let Err(e) = run(&mut app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(app: &mut TwofoldApp) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    writeln!(stdout, "{HELP_LINE}")?;
    loop {
        write!(stdout, "{}> ", render::render(app.session()))?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(stdout)?;
            return Ok(());
        };
        let mut action_queue = ActionRequestQueue::default();
        input::handle_line(&line, &mut action_queue);
        app.handle_all(&mut action_queue);
        if app.quit_requested() {
            return Ok(());
        }
    }
}
