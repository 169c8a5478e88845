//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::entities::Mode;
use crate::mode::{validation_mode, PLAYER_LIVES};

/// Turn-based wizard / warrior / brigand duel game
#[derive(Parser, Debug)]
#[command(name = "duel_game")]
#[command(about = "Turn-based wizard / warrior / brigand duel game")]
#[command(version)]
pub struct Args {
    /// Leaderboard file (created on first game over)
    #[arg(long, value_name = "PATH", default_value = "scores.txt")]
    pub scores_file: PathBuf,

    /// Play every session in this mode instead of asking (easy, normal, hard)
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<Mode>,

    /// Lives the player starts each session with
    #[arg(long, default_value_t = PLAYER_LIVES, value_parser = clap::value_parser!(u32).range(1..))]
    pub lives: u32,

    /// Seed for the enemy's choices, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_mode(text: &str) -> Result<Mode, String> {
    validation_mode(text).map_err(|e| e.to_string())
}

pub fn parse_args() -> Args {
    Args::parse()
}
