//! Command-line entry: load a FEN, explore to a depth, report the count.
//!
//! Usage: `chess_explorer [DEPTH] [FEN]`. Depth defaults to 3, the FEN to
//! the standard starting position.

use std::env;
use std::process::ExitCode;

use crate::board::{Position, START_FEN};
use crate::explore::count_nodes;
use crate::view::ProgressTracker;

pub fn run() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let depth: usize = match args.first() {
        None => 3,
        Some(raw) => match raw.parse() {
            Ok(depth) => depth,
            Err(_) => {
                eprintln!("invalid depth '{raw}'");
                return ExitCode::FAILURE;
            }
        },
    };

    let fen = args.get(1).map_or(START_FEN, String::as_str);
    let mut pos = match Position::try_from_fen(fen) {
        Ok(pos) => pos,
        Err(err) => {
            eprintln!("cannot load position: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{pos}");
    println!();

    let progress = ProgressTracker::new();
    let nodes = count_nodes(&mut pos, depth, &mut progress.clone());

    println!(
        "depth {depth}: {nodes} nodes ({} interior positions expanded)",
        progress.interior_nodes()
    );
    ExitCode::SUCCESS
}
