//! Turn, selection and capture state machine.

use std::collections::HashSet;

use thiserror::Error;

use crate::board::Board;
use crate::movegen::destinations;
use crate::types::*;
use crate::Engine;

/// Opponent selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    TwoPlayer,
    SinglePlayer,
}

/// Game result. The only terminal condition is king capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    WhiteWins,
    BlackWins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),
    #[error("move {from} -> {to} is not legal")]
    InvalidMove { from: Coord, to: Coord },
    #[error("the game is already over")]
    GameOver,
}

/// The per-game state: board, turn tracker, current selection, captured
/// ledgers and the installed machine opponent.
///
/// Mutated only from the single event-handling path; one pointer event is
/// fully processed (selection, move, capture, engine reply) before the
/// next is accepted.
pub struct GameState {
    board: Board,
    turn: Color,
    selected: Option<Coord>,
    targets: HashSet<Coord>,
    captured: [Vec<Piece>; 2],
    visible_levels: u8,
    mode: Mode,
    outcome: GameOutcome,
    engine: Option<Box<dyn Engine>>,
    ai_color: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game from the starting placement, two-player mode, white to
    /// move. Install an engine to enable single-player mode.
    pub fn new() -> Self {
        Self::with_board(Board::startpos())
    }

    /// A game over a prepared position, for scenarios and tests.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: Color::White,
            selected: None,
            targets: HashSet::new(),
            captured: [Vec::new(), Vec::new()],
            visible_levels: LEVEL_COUNT as u8,
            mode: Mode::TwoPlayer,
            outcome: GameOutcome::InProgress,
            engine: None,
            ai_color: Color::Black,
        }
    }

    /// Install the machine opponent used in single-player mode. It plays
    /// black.
    pub fn install_engine(&mut self, engine: Box<dyn Engine>) {
        self.engine = Some(engine);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != GameOutcome::InProgress
    }

    pub fn winner(&self) -> Option<Color> {
        match self.outcome {
            GameOutcome::InProgress => None,
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
        }
    }

    /// Coordinate of the currently selected piece, if any.
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Cached legal destinations of the selection, for highlighting.
    pub fn targets(&self) -> &HashSet<Coord> {
        &self.targets
    }

    /// Pieces of `color` that have been captured, in capture order.
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.idx()]
    }

    pub fn visible_levels(&self) -> u8 {
        self.visible_levels
    }

    /// Display-only layer count; the rules never consult it.
    pub fn set_visible_levels(&mut self, n: u8) {
        self.visible_levels = n.clamp(1, LEVEL_COUNT as u8);
    }

    /// Switch opponent mode. Entering single-player while it is already
    /// the machine's turn plays one engine move immediately.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        if mode == Mode::SinglePlayer && !self.is_terminal() && self.turn == self.ai_color {
            self.engine_move();
        }
    }

    /// One pointer event: select, move, or deselect.
    ///
    /// `None` (a click that resolved to no cell) is a no-op and keeps the
    /// selection. Any in-board click while a piece is selected ends with
    /// the selection cleared, whether or not a move was made.
    pub fn pointer_down(&mut self, coord: Option<Coord>) {
        if self.is_terminal() {
            return;
        }
        if self.mode == Mode::SinglePlayer && self.turn == self.ai_color {
            return;
        }
        let coord = match coord {
            Some(c) if c.in_bounds() => c,
            _ => return,
        };

        match self.selected.take() {
            Some(from) => {
                let is_target = self.targets.contains(&coord);
                self.targets.clear();
                if is_target {
                    self.play(from, coord);
                }
            }
            None => {
                if let Some(pc) = self.board.piece_at(coord) {
                    if pc.color == self.turn {
                        self.selected = Some(coord);
                        self.targets = destinations(&self.board, coord).into_iter().collect();
                    }
                }
            }
        }
    }

    /// Programmatic move entry: validates and plays one move for the side
    /// to move, returning the captured piece. Drives the same turn/capture
    /// path as `pointer_down`, including the engine reply in single-player
    /// mode.
    pub fn try_move(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !from.in_bounds() {
            return Err(GameError::OutOfBounds(from));
        }
        if !to.in_bounds() {
            return Err(GameError::OutOfBounds(to));
        }
        match self.board.piece_at(from) {
            Some(pc) if pc.color == self.turn => {}
            _ => return Err(GameError::InvalidMove { from, to }),
        }
        if !destinations(&self.board, from).contains(&to) {
            return Err(GameError::InvalidMove { from, to });
        }

        let captured = self.board.piece_at(to);
        self.selected = None;
        self.targets.clear();
        self.play(from, to);
        Ok(captured)
    }

    /// Apply a validated move, then hand the turn over (and let the
    /// machine answer in single-player mode).
    fn play(&mut self, from: Coord, to: Coord) {
        if self.apply_move(from, to) {
            return;
        }
        self.turn = self.turn.other();
        if self.mode == Mode::SinglePlayer && self.turn == self.ai_color {
            self.engine_move();
        }
    }

    /// Execute the board transaction and record any capture. Returns true
    /// when the game ended: a captured king is appended to the ledger and
    /// the board fully updated before the outcome is set, so a final
    /// render sees the winning position.
    fn apply_move(&mut self, from: Coord, to: Coord) -> bool {
        if let Some(victim) = self.board.move_piece(from, to) {
            self.captured[victim.color.idx()].push(victim);
            if victim.kind == PieceKind::King {
                self.outcome = match self.turn {
                    Color::White => GameOutcome::WhiteWins,
                    Color::Black => GameOutcome::BlackWins,
                };
                return true;
            }
        }
        false
    }

    /// One machine move: a single choice from the installed engine, applied
    /// with the same capture/terminal logic as a human move. With no engine
    /// or no move available the turn stays with the machine; stalemate is
    /// not detected.
    fn engine_move(&mut self) {
        let engine = match self.engine.as_mut() {
            Some(e) => e,
            None => return,
        };
        let planned = match engine.choose_move(&self.board, self.ai_color) {
            Some(m) => m,
            None => return,
        };
        if !self.apply_move(planned.from, planned.to) {
            self.turn = self.turn.other();
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
