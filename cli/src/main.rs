use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use demine_core::{Board, Position, RandomLayoutGenerator};
use tracing_subscriber::EnvFilter;

use input::{Command, InputError};
use level::Level;

mod input;
mod level;
mod render;

#[derive(Parser, Debug)]
#[command(name = "demine", about = "Console minesweeper")]
struct Args {
    /// Difficulty preset
    #[arg(long, value_enum, default_value = "beginner")]
    level: Level,

    /// Seed for the mine layout; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::debug!(seed, level = ?args.level, "seeding board");

    let mut board = Board::new(args.level.config());
    board.initialize(RandomLayoutGenerator::new(seed));

    println!("Minesweeper. Commands: open <cell>, flag <cell>, quit (e.g. `open c3`).");
    run_loop(&mut board)?;

    println!("{}", render::render_board(&board));
    if board.is_won() {
        println!("You win, every cell accounted for.");
    }
    if board.is_lost() {
        println!("Boom. That was a mine.");
    }

    Ok(())
}

/// One engine action per iteration; recoverable input faults are printed and
/// the loop continues.
fn run_loop(board: &mut Board) -> Result<()> {
    let stdin = io::stdin();

    while board.is_in_progress() {
        println!("{}", render::render_board(board));
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match act(board, &line) {
            Ok(Turn::Continue) => {}
            Ok(Turn::Quit) => break,
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}

enum Turn {
    Continue,
    Quit,
}

fn act(board: &mut Board, line: &str) -> Result<Turn, InputError> {
    match input::parse_command(line)? {
        Command::Open(position) => {
            validate(board, position)?;
            board.open_at(position);
        }
        Command::Flag(position) => {
            validate(board, position)?;
            board.flag_at(position);
        }
        Command::Quit => return Ok(Turn::Quit),
    }
    Ok(Turn::Continue)
}

/// Bounds are checked here, before the position ever reaches the engine.
fn validate(board: &Board, position: Position) -> Result<(), InputError> {
    if board.is_invalid_position(position) {
        return Err(InputError::InvalidPosition);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
