//! Benchmarks for board scrambling and solved checks.
//!
//! # Benchmarks
//!
//! - **`scramble`**: Fisher-Yates scramble plus row-major reassignment,
//!   across every difficulty side in the selector set.
//! - **`is_solved`**: the per-frame solved check on a scrambled board.
//!
//! # Test Data
//!
//! Uses fixed seeds to ensure reproducibility:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f12654688e19298`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench scramble
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use picslice_core::GridDims;
use picslice_game::{Board, ScrambleSeed};

const SEEDS: [&str; 2] = [
    "c1d44bd6afaf8af64f12654688e19298",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7",
];

const SIDES: [u8; 5] = [3, 4, 5, 6, 8];

fn bench_scramble(c: &mut Criterion) {
    for side in SIDES {
        let dims = GridDims::square(side).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = ScrambleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new("scramble", format!("{side}x{side}_seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || (Board::new(dims), hint::black_box(seed.rng())),
                        |(mut board, mut rng)| {
                            board.scramble(&mut rng);
                            board
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_is_solved(c: &mut Criterion) {
    for side in SIDES {
        let dims = GridDims::square(side).unwrap();
        let seed = ScrambleSeed::from_str(SEEDS[0]).unwrap();
        let mut board = Board::new(dims);
        board.scramble(&mut seed.rng());

        c.bench_with_input(
            BenchmarkId::new("is_solved", format!("{side}x{side}")),
            &board,
            |b, board| {
                b.iter(|| hint::black_box(board).is_solved());
            },
        );
    }
}

criterion_group!(benches, bench_scramble, bench_is_solved);
criterion_main!(benches);
