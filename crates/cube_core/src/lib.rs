pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by machine opponents (random, or anything else)
// =============================================================================

/// Trait that machine opponents implement.
///
/// The game state asks the installed engine for exactly one move per turn;
/// there is no search budget to manage, so the contract is a single choice
/// over the current board.
pub trait Engine: Send {
    /// Pick one move for `side`, or `None` when the side has no legal
    /// (piece, destination) pair.
    fn choose_move(&mut self, board: &Board, side: Color) -> Option<PlannedMove>;

    /// Returns the engine's name for display and logs.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
