//! Example sampling scramble quality across difficulties.
//!
//! For each board side, this scrambles many boards with fresh random seeds
//! and reports:
//!
//! - How often the scramble came out already solved (the model performs no
//!   re-roll, so this happens with probability 1/n! for n tiles)
//! - The average number of tiles left in their home cell
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble_stats
//! ```
//!
//! Control the sample count (default: 100000):
//!
//! ```sh
//! cargo run --example scramble_stats -- --samples 1000000
//! ```
//!
//! Restrict to specific board sides:
//!
//! ```sh
//! cargo run --example scramble_stats -- --side 3 --side 4
//! ```

use std::process;

use clap::Parser;
use picslice_core::GridDims;
use picslice_game::{Board, ScrambleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of scrambles to sample per side.
    #[arg(long, value_name = "COUNT", default_value_t = 100_000)]
    samples: usize,

    /// Board side to sample (3-8). Repeatable.
    #[arg(short, long = "side", value_name = "SIDE", num_args = 1..)]
    sides: Vec<u8>,
}

fn main() {
    let args = Args::parse();
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let sides = if args.sides.is_empty() {
        vec![3, 4, 5, 6, 8]
    } else {
        args.sides
    };

    println!(
        "{:>6} {:>10} {:>14} {:>16}",
        "side", "samples", "solved", "avg home tiles"
    );

    for side in sides {
        let Ok(dims) = GridDims::square(side) else {
            eprintln!("Board side must be positive, got {side}.");
            process::exit(2);
        };

        let (solved, home_tiles) = (0..args.samples)
            .into_par_iter()
            .map(|_| {
                let mut board = Board::new(dims);
                board.scramble(&mut ScrambleSeed::random().rng());
                let home = board.tiles().iter().filter(|tile| tile.is_home()).count();
                (usize::from(board.is_solved()), home)
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        #[expect(clippy::cast_precision_loss)]
        let avg_home = home_tiles as f64 / args.samples as f64;
        println!(
            "{:>6} {:>10} {:>14} {:>16.4}",
            format!("{side}x{side}"),
            args.samples,
            solved,
            avg_home,
        );
    }
}
