//! Tictactoe-AI: a perfect-play tic-tac-toe engine.
//!
//! ## Usage
//!
//! - `tictactoe-ai` - Show a self-play demo
//! - `tictactoe-ai move [FILE]` - Decide a move for a JSON game snapshot
//! - `tictactoe-ai ttp` - Start the text protocol loop
//! - `tictactoe-ai random` - Play the engine against random moves
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe_ai::board::Grid;
use tictactoe_ai::game::{Game, decide};
use tictactoe_ai::playout::{Outcome, random_playout, self_play};
use tictactoe_ai::position::{Board, apply_move, str_coord};
use tictactoe_ai::ttp::TtpEngine;

/// Tictactoe-AI: a perfect-play tic-tac-toe engine
#[derive(Parser)]
#[command(name = "tictactoe-ai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TTP (Tic-Tac-Toe Text Protocol) loop on stdin/stdout
    Ttp,
    /// Play the engine against itself and print every position
    Demo,
    /// Read a JSON game snapshot and print the chosen move as JSON
    Move {
        /// Snapshot file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Play the engine against uniformly random moves
    Random {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: usize,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ttp) => {
            info!("starting ttp loop");
            TtpEngine::new().run().context("ttp loop failed")
        }
        Some(Commands::Move { file }) => run_move(file),
        Some(Commands::Random { games, seed }) => run_random(games, seed),
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_move(file: Option<PathBuf>) -> Result<()> {
    let game = match &file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("cannot open snapshot {}", path.display()))?;
            Game::from_reader(f)
        }
        None => Game::from_reader(io::stdin().lock()),
    }
    .context("cannot load game snapshot")?;

    game.validate().context("invalid game snapshot")?;

    let chosen = decide(&game);
    println!("{}", serde_json::to_string(&chosen)?);
    Ok(())
}

fn run_random(games: usize, seed: u64) -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let (mut wins, mut draws, mut losses) = (0, 0, 0);

    for game in 0..games {
        let first = if game % 2 == 0 { "engine" } else { "random" };
        let playout = random_playout(Board::new(), "engine", "random", first, &mut rng);
        match playout.outcome {
            Outcome::Won("engine") => wins += 1,
            Outcome::Won(_) => losses += 1,
            Outcome::Draw => draws += 1,
        }
    }

    println!("games: {games}  wins: {wins}  draws: {draws}  losses: {losses}");
    if losses > 0 {
        bail!("engine lost {losses} game(s) against random play");
    }
    Ok(())
}

fn run_demo() {
    println!("Tictactoe-AI: perfect-play tic-tac-toe\n");

    let playout = self_play(Board::new(), "x", "o");
    let mut board = Board::new();
    let mut player = "x";

    for (ply, &m) in playout.moves.iter().enumerate() {
        board = apply_move(&board, m, player);
        println!("Move {}: {player} plays {}", ply + 1, str_coord(m));
        println!("{}", Grid::from(board));
        player = if player == "x" { "o" } else { "x" };
    }

    match playout.outcome {
        Outcome::Won(winner) => println!("Result: {winner} wins"),
        Outcome::Draw => println!("Result: draw"),
    }
}
