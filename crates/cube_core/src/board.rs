use crate::types::*;

fn cell_index(c: Coord) -> usize {
    let size = BOARD_SIZE as usize;
    (c.z as usize) * size * size + (c.y as usize) * size + (c.x as usize)
}

/// The cubic grid. Owns every piece; a piece's position is the cell that
/// holds it, so placement can never dangle or duplicate.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// The starting placement: white on level 0, black on the top level,
    /// middle level(s) empty.
    pub fn startpos() -> Self {
        let mut b = Self::empty();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (i, &kind) in back.iter().enumerate() {
            let x = i as i8;
            b.set_piece(
                Coord::new(x, BOARD_SIZE - 1, 0),
                Some(Piece {
                    color: Color::White,
                    kind,
                }),
            );
            b.set_piece(
                Coord::new(x, 0, LEVEL_COUNT - 1),
                Some(Piece {
                    color: Color::Black,
                    kind,
                }),
            );
        }
        for x in 0..BOARD_SIZE {
            b.set_piece(
                Coord::new(x, BOARD_SIZE - 2, 0),
                Some(Piece {
                    color: Color::White,
                    kind: PieceKind::Pawn,
                }),
            );
            b.set_piece(
                Coord::new(x, 1, LEVEL_COUNT - 1),
                Some(Piece {
                    color: Color::Black,
                    kind: PieceKind::Pawn,
                }),
            );
        }
        b
    }

    /// Piece at an in-bounds coordinate, or `None` for an empty cell.
    /// Indexing an out-of-bounds coordinate fails fast; callers check
    /// `in_bounds` first.
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        self.cells[cell_index(c)]
    }

    pub fn set_piece(&mut self, c: Coord, pc: Option<Piece>) {
        self.cells[cell_index(c)] = pc;
    }

    /// The move transaction: clears the source cell, overwrites the
    /// destination, and returns whatever occupied it. Performs no legality
    /// check; the caller must have validated the destination. No rollback.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let moving = self.cells[cell_index(from)].take();
        let captured = self.cells[cell_index(to)];
        self.cells[cell_index(to)] = moving;
        captured
    }

    /// Every occupied cell, level by level.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        (0..LEVEL_COUNT).flat_map(move |z| {
            (0..BOARD_SIZE).flat_map(move |y| {
                (0..BOARD_SIZE).filter_map(move |x| {
                    let c = Coord::new(x, y, z);
                    self.piece_at(c).map(|p| (c, p))
                })
            })
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
