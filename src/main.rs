//! GoAT: score a finished Go board.
//!
//! ## Usage
//!
//! - `goat -i board.txt --scoring Chinese` - Area scoring, no komi
//! - `goat -i board.txt --scoring Japanese --komi --black-captures 3` -
//!   Territory scoring with komi and stones captured during play
//!
//! The board file uses `X` for Black, `O` for White and `.` for empty points.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use goat_rust::board::Board;
use goat_rust::colors::Captures;
use goat_rust::loader::parse_board;
use goat_rust::scoring::{Outcome, Score, ScoringSystem};

/// GoAT: Go board region analysis and scoring
#[derive(Parser)]
#[command(name = "goat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board file to score
    #[arg(short, long)]
    input: PathBuf,

    /// Rule system used for counting
    #[arg(long, value_parser = ["Japanese", "Chinese"])]
    scoring: String,

    /// Add komi to White's score (6.5 Japanese, 7.5 Chinese)
    #[arg(long)]
    komi: bool,

    /// Black stones captured during play
    #[arg(long, default_value_t = 0)]
    black_captures: u32,

    /// White stones captured during play
    #[arg(long, default_value_t = 0)]
    white_captures: u32,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let system: ScoringSystem = cli.scoring.parse()?;

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read board from {}", cli.input.display()))?;
    let loaded = parse_board(&text)
        .with_context(|| format!("failed to parse board in {}", cli.input.display()))?;

    let mut captures = loaded.zero_captures();
    let seeded = Captures::new(cli.black_captures, cli.white_captures);
    for (color, n) in seeded.iter() {
        captures.insert(color.name().to_string(), n);
    }

    let mut board = Board::from_values(&loaded.values, &loaded.colors, &captures)
        .context("invalid board")?;
    board.clear_dead_regions();
    println!("{board}");

    let score = Score::new(system, cli.komi);
    if score.komi() {
        info!("{} komi of {} goes to White.", score.system(), score.default_komi());
    }
    let scores = score.score(&board, Some(board.captures()))?;
    println!("{scores}");
    match scores.winner() {
        Outcome::Win(color) => println!("{color} wins."),
        Outcome::Tie => println!("Tie game."),
    }
    Ok(())
}
