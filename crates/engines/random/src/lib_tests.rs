use super::*;
use cube_core::{Coord, Piece, PieceKind};

#[test]
fn random_engine_returns_enumerated_move() {
    let mut engine = RandomEngine::with_seed(0xC0FFEE);
    let board = Board::startpos();
    let legal = all_moves(&board, Color::White);

    for _ in 0..1000 {
        let chosen = engine.choose_move(&board, Color::White);
        assert!(chosen.is_some());
        assert!(legal.contains(&chosen.unwrap()));
    }
}

#[test]
fn random_engine_handles_side_with_no_pieces() {
    let mut engine = RandomEngine::with_seed(7);
    let board = Board::empty();

    assert!(engine.choose_move(&board, Color::Black).is_none());
}

#[test]
fn random_engine_handles_side_with_no_moves() {
    // A black pawn on the far row has no forward or diagonal cells left.
    let mut board = Board::empty();
    board.set_piece(
        Coord::new(3, 7, 0),
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Pawn,
        }),
    );

    let mut engine = RandomEngine::with_seed(7);
    assert!(all_moves(&board, Color::Black).is_empty());
    assert!(engine.choose_move(&board, Color::Black).is_none());
}

#[test]
fn seeded_engines_replay_identically() {
    let board = Board::startpos();
    let mut a = RandomEngine::with_seed(42);
    let mut b = RandomEngine::with_seed(42);

    for _ in 0..20 {
        assert_eq!(
            a.choose_move(&board, Color::Black),
            b.choose_move(&board, Color::Black)
        );
    }
}
