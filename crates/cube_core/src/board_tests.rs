use super::*;

#[test]
fn test_startpos_back_ranks() {
    let b = Board::startpos();

    // Kings sit on file 4 of each back rank.
    let wk = b.piece_at(Coord::new(4, BOARD_SIZE - 1, 0));
    assert_eq!(
        wk,
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King,
        })
    );
    let bk = b.piece_at(Coord::new(4, 0, LEVEL_COUNT - 1));
    assert_eq!(
        bk,
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::King,
        })
    );

    // Rooks on the corners, queens on file 3.
    for &(x, kind) in &[
        (0, PieceKind::Rook),
        (1, PieceKind::Knight),
        (2, PieceKind::Bishop),
        (3, PieceKind::Queen),
        (5, PieceKind::Bishop),
        (6, PieceKind::Knight),
        (7, PieceKind::Rook),
    ] {
        let w = b.piece_at(Coord::new(x, BOARD_SIZE - 1, 0));
        assert_eq!(w.map(|p| p.kind), Some(kind));
        let blk = b.piece_at(Coord::new(x, 0, LEVEL_COUNT - 1));
        assert_eq!(blk.map(|p| p.kind), Some(kind));
    }
}

#[test]
fn test_startpos_pawn_rows_and_empty_middle() {
    let b = Board::startpos();

    for x in 0..BOARD_SIZE {
        let w = b.piece_at(Coord::new(x, BOARD_SIZE - 2, 0));
        assert_eq!(
            w,
            Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            })
        );
        let blk = b.piece_at(Coord::new(x, 1, LEVEL_COUNT - 1));
        assert_eq!(
            blk,
            Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            })
        );
    }

    // The middle level starts empty.
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            assert!(b.piece_at(Coord::new(x, y, 1)).is_none());
        }
    }

    assert_eq!(b.pieces().count(), 64);
}

#[test]
fn test_move_piece_transfers_ownership() {
    let mut b = Board::empty();
    let rook = Piece {
        color: Color::White,
        kind: PieceKind::Rook,
    };
    b.set_piece(Coord::new(0, 0, 0), Some(rook));

    let captured = b.move_piece(Coord::new(0, 0, 0), Coord::new(0, 5, 0));
    assert_eq!(captured, None);
    assert!(b.piece_at(Coord::new(0, 0, 0)).is_none());
    assert_eq!(b.piece_at(Coord::new(0, 5, 0)), Some(rook));
}

#[test]
fn test_move_piece_returns_captured_occupant() {
    let mut b = Board::empty();
    let rook = Piece {
        color: Color::White,
        kind: PieceKind::Rook,
    };
    let pawn = Piece {
        color: Color::Black,
        kind: PieceKind::Pawn,
    };
    b.set_piece(Coord::new(0, 0, 0), Some(rook));
    b.set_piece(Coord::new(0, 3, 0), Some(pawn));

    let captured = b.move_piece(Coord::new(0, 0, 0), Coord::new(0, 3, 0));
    assert_eq!(captured, Some(pawn));
    // Exactly one piece remains, at the destination.
    assert_eq!(b.pieces().count(), 1);
    assert_eq!(b.piece_at(Coord::new(0, 3, 0)), Some(rook));
}

#[test]
fn test_pieces_scan_reports_coordinates() {
    let mut b = Board::empty();
    let knight = Piece {
        color: Color::Black,
        kind: PieceKind::Knight,
    };
    b.set_piece(Coord::new(6, 2, 1), Some(knight));

    let all: Vec<_> = b.pieces().collect();
    assert_eq!(all, vec![(Coord::new(6, 2, 1), knight)]);
}

#[test]
fn test_coord_bounds() {
    assert!(Coord::new(0, 0, 0).in_bounds());
    assert!(Coord::new(BOARD_SIZE - 1, BOARD_SIZE - 1, LEVEL_COUNT - 1).in_bounds());
    assert!(!Coord::new(-1, 0, 0).in_bounds());
    assert!(!Coord::new(0, BOARD_SIZE, 0).in_bounds());
    assert!(!Coord::new(0, 0, LEVEL_COUNT).in_bounds());

    // Addition is unchecked; only in_bounds validates.
    let escaped = Coord::new(BOARD_SIZE - 1, 0, 0) + Coord::new(1, 0, 0);
    assert_eq!(escaped, Coord::new(BOARD_SIZE, 0, 0));
    assert!(!escaped.in_bounds());
}
