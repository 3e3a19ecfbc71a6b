//! Generate a maze and print the shortest path across it.
//!
//! Run: cargo run --bin gridpath -- 16 24 --seed 7

use std::io;

use gridpath_demos::config::USAGE;
use gridpath_demos::{Board, DemoConfig, logger, render};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Error: {e}");
    }

    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bounds = config.bounds()?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("grid {bounds}, seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(bounds);
    board.load_maze(&mut rng);

    let mut open = bounds.iter().filter(|c| !board.walls().contains(c));
    let first = open.next();
    let last = open.last().or(first);
    if let (Some(start), Some(goal)) = (first, last) {
        board.click(start)?;
        board.click(goal)?;
    }

    if config.plain {
        print!("{}", render::render_plain(&board));
        println!("{}", board.status());
    } else {
        render::render_styled(&board, &mut io::stdout().lock())?;
    }
    println!("path length: {}", board.path().len());
    if let Some((cell, d)) = board.farthest_from_start() {
        println!("farthest open cell from start: {cell}, {d} steps");
    }
    Ok(())
}
