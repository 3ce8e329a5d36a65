use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use env_logger::{Env, Target};

use blocktris::config::{MAX_BOARD_H, MAX_BOARD_W, MIN_BOARD_W};
use blocktris::{BOARD_H, BOARD_W, GAME_FPS};

#[derive(Parser, Debug)]
#[command(name = "blocktris", about = "Falling-block puzzle for the terminal")]
pub struct Args {
    /// Board width in cells.
    #[arg(
        long,
        default_value_t = BOARD_W,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_BOARD_W as u64..=MAX_BOARD_W as u64)
    )]
    pub width: usize,

    /// Board height in cells.
    #[arg(
        long,
        default_value_t = BOARD_H,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_BOARD_H as u64)
    )]
    pub height: usize,

    /// Game updates per second; pieces fall every half second of updates.
    #[arg(long, default_value_t = GAME_FPS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Seed for piece selection. If omitted, pieces come from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default `info`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// The terminal belongs to the game, so logs only go to a file when asked.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
