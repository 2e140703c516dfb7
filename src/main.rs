//! Checkers-Rust: console draughts against a random-move computer.
//!
//! ## Usage
//!
//! - `checkers-rust` - Play light against the computer
//! - `checkers-rust play --side dark` - Play dark against the computer
//! - `checkers-rust selfplay` - Watch the computer play both sides

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use checkers_rust::board::{Color, Square, parse_square};
use checkers_rust::game::{Game, Status, WinReason};
use checkers_rust::moves::MoveSequence;

/// Checkers-Rust: 8x8 draughts with mandatory captures
#[derive(Parser)]
#[command(name = "checkers-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Worker threads for move enumeration (0 = available parallelism)
    #[arg(long, global = true, default_value_t = 0)]
    threads: usize,

    /// Seed for the computer's move choice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play {
        /// Side played by the human
        #[arg(long, value_enum, default_value_t = Side::Light)]
        side: Side,
    },
    /// Let the computer play both sides
    Selfplay {
        /// Stop after this many moves
        #[arg(long, default_value_t = 200)]
        max_moves: usize,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Side {
    Light,
    Dark,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => Color::Light,
            Side::Dark => Color::Dark,
        }
    }
}

const RULES: &str = "\
---- RULES ----
1) Men move one square diagonally forward.
2) Kings move any distance diagonally, forwards or backwards, but cannot jump their own pieces.
3) Capturing is mandatory.
4) Men capture both forwards and backwards.
5) Multiple captures in one turn are allowed.
6) Kings capture at long range and may land on any empty square behind the captured piece.
7) A capturing piece must keep capturing while it can.
8) When several captures are available, the player chooses freely.
9) Light moves first.

---- WINNING ----
Capture all of your opponent's pieces,
or leave your opponent without a legal move.
";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    match cli.command {
        Some(Commands::Play { side }) => play(side.into(), &mut rng),
        Some(Commands::Selfplay { max_moves }) => selfplay(max_moves, &mut rng),
        None => play(Color::Light, &mut rng),
    }
}

fn play(human: Color, rng: &mut fastrand::Rng) -> Result<()> {
    println!("{RULES}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    loop {
        let started = Instant::now();
        println!("{}", game.board.render(human));

        let side = game.to_move;
        let who = if side == human { "human" } else { "computer" };
        println!("[{side} to move] ({who}):");

        if let Status::Won { winner, reason } = game.status() {
            announce(winner, reason);
            break;
        }

        let moves = game.legal_moves();
        let capturing = moves.first().is_some_and(|m| m.is_capture());

        if side == human {
            if capturing {
                println!("Capture is mandatory!");
            }
            let chosen = loop {
                print!("Enter your move (e.g. A6 B5): ");
                io::stdout().flush().context("failed to flush stdout")?;

                let Some(line) = lines.next() else {
                    println!();
                    return Ok(());
                };
                let line = line.context("failed to read from stdin")?;

                match read_move(&line, human) {
                    Ok((from, to)) => match Game::find_move(&moves, from, to) {
                        Some(m) => break m.clone(),
                        None => println!("Illegal move."),
                    },
                    Err(err) => println!("Invalid input: {err:#}"),
                }
            };
            if !game.play(&chosen) {
                bail!("could not apply {chosen}");
            }
        } else {
            let Some(chosen) = Game::choose_random(&moves, rng).cloned() else {
                bail!("no move available for {side}");
            };
            report(side, &chosen, human);
            if !game.play(&chosen) {
                bail!("could not apply {chosen}");
            }
        }

        println!("Move #{} took {} ms\n", game.move_number, started.elapsed().as_millis());
    }

    println!("Thanks for playing!");
    Ok(())
}

fn selfplay(max_moves: usize, rng: &mut fastrand::Rng) -> Result<()> {
    let mut game = Game::new();

    while game.move_number < max_moves {
        if let Status::Won { winner, reason } = game.status() {
            println!("{}", game.board);
            announce(winner, reason);
            return Ok(());
        }

        let moves = game.legal_moves();
        let Some(chosen) = Game::choose_random(&moves, rng).cloned() else {
            bail!("no move available for {}", game.to_move);
        };
        report(game.to_move, &chosen, Color::Light);
        if !game.play(&chosen) {
            bail!("could not apply {chosen}");
        }
    }

    println!("{}", game.board);
    println!("Stopped after {max_moves} moves without a result.");
    Ok(())
}

/// Parse a line such as `"A6 B5"` into a (from, to) pair.
fn read_move(line: &str, viewer: Color) -> Result<(Square, Square)> {
    let mut parts = line.split_whitespace();
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected two squares separated by a space");
    };
    let from = parse_square(from, viewer).with_context(|| format!("from square '{from}'"))?;
    let to = parse_square(to, viewer).with_context(|| format!("to square '{to}'"))?;
    Ok((from, to))
}

fn report(side: Color, seq: &MoveSequence, viewer: Color) {
    if seq.is_capture() {
        println!(
            "Computer ({side}) captures: {} [taken: {}]",
            seq.notation(viewer),
            seq.captures
        );
    } else {
        println!("Computer ({side}) moves: {}", seq.notation(viewer));
    }
}

fn announce(winner: Color, reason: WinReason) {
    match reason {
        WinReason::Elimination => println!("{winner} wins: all opposing pieces captured!"),
        WinReason::NoMoves => println!("{} has no moves. {winner} wins!", winner.opponent()),
    }
}
