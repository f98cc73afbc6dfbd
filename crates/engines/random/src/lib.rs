//! Random Move Opponent
//!
//! The machine player of single-player mode: it selects uniformly at random
//! from every (piece, destination) pair its side has. Also useful for:
//! - Exercising move generation under long self-play runs
//! - A baseline any smarter opponent should beat

use cube_core::{all_moves, Board, Color, Engine, PlannedMove};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An opponent that plays random legal moves.
///
/// No evaluation of any kind: one uniform draw from the enumerated
/// candidate set per turn.
#[derive(Debug)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic draws for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, side: Color) -> Option<PlannedMove> {
        let moves = all_moves(board, side);
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
