use crate::{board::Board, types::*};

/// The 6 axis-aligned rook rays.
const ROOK_DIRS: [Coord; 6] = [
    Coord::new(1, 0, 0),
    Coord::new(-1, 0, 0),
    Coord::new(0, 1, 0),
    Coord::new(0, -1, 0),
    Coord::new(0, 0, 1),
    Coord::new(0, 0, -1),
];

/// The 12 two-axis diagonals: 4 within a level plus 4 each across the
/// xz and yz planes.
const BISHOP_DIRS: [Coord; 12] = [
    Coord::new(1, 1, 0),
    Coord::new(1, -1, 0),
    Coord::new(-1, 1, 0),
    Coord::new(-1, -1, 0),
    Coord::new(1, 0, 1),
    Coord::new(1, 0, -1),
    Coord::new(-1, 0, 1),
    Coord::new(-1, 0, -1),
    Coord::new(0, 1, 1),
    Coord::new(0, 1, -1),
    Coord::new(0, -1, 1),
    Coord::new(0, -1, -1),
];

/// All signed permutations of step magnitudes (2, 1, 0): the 2D L-shape
/// laid across any two of the three axes.
const KNIGHT_OFFSETS: [Coord; 24] = [
    // xy plane
    Coord::new(2, 1, 0),
    Coord::new(2, -1, 0),
    Coord::new(-2, 1, 0),
    Coord::new(-2, -1, 0),
    Coord::new(1, 2, 0),
    Coord::new(1, -2, 0),
    Coord::new(-1, 2, 0),
    Coord::new(-1, -2, 0),
    // xz plane
    Coord::new(2, 0, 1),
    Coord::new(2, 0, -1),
    Coord::new(-2, 0, 1),
    Coord::new(-2, 0, -1),
    Coord::new(1, 0, 2),
    Coord::new(1, 0, -2),
    Coord::new(-1, 0, 2),
    Coord::new(-1, 0, -2),
    // yz plane
    Coord::new(0, 2, 1),
    Coord::new(0, 2, -1),
    Coord::new(0, -2, 1),
    Coord::new(0, -2, -1),
    Coord::new(0, 1, 2),
    Coord::new(0, 1, -2),
    Coord::new(0, -1, 2),
    Coord::new(0, -1, -2),
];

/// Generate the destination set for the piece at `from`, returning a
/// freshly allocated vector. Empty if the cell is empty.
pub fn destinations(board: &Board, from: Coord) -> Vec<Coord> {
    let mut out = Vec::with_capacity(32);
    destinations_into(board, from, &mut out);
    out
}

/// Generate destinations into the provided buffer, reusing it across calls.
pub fn destinations_into(board: &Board, from: Coord, out: &mut Vec<Coord>) {
    out.clear();
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Rook => gen_slider(board, from, pc.color, &ROOK_DIRS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &BISHOP_DIRS, out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &ROOK_DIRS, out);
            gen_slider(board, from, pc.color, &BISHOP_DIRS, out);
        }
        PieceKind::Knight => gen_knight(board, from, pc.color, out),
        PieceKind::King => gen_king(board, from, pc.color, out),
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
    }
}

/// Every (piece, destination) pair for one side: the candidate set the
/// machine opponent draws from.
pub fn all_moves(board: &Board, side: Color) -> Vec<PlannedMove> {
    let mut out = Vec::new();
    let mut buf = Vec::with_capacity(32);
    for (from, pc) in board.pieces() {
        if pc.color != side {
            continue;
        }
        destinations_into(board, from, &mut buf);
        for &to in &buf {
            out.push(PlannedMove::new(from, to));
        }
    }
    out
}

fn gen_slider(board: &Board, from: Coord, c: Color, dirs: &[Coord], out: &mut Vec<Coord>) {
    for &d in dirs {
        let mut p = from + d;
        while p.in_bounds() {
            match board.piece_at(p) {
                None => out.push(p),
                Some(t) => {
                    if t.color != c {
                        out.push(p);
                    }
                    break;
                }
            }
            p = p + d;
        }
    }
}

fn gen_knight(board: &Board, from: Coord, c: Color, out: &mut Vec<Coord>) {
    for &d in &KNIGHT_OFFSETS {
        let to = from + d;
        if !to.in_bounds() {
            continue;
        }
        match board.piece_at(to) {
            None => out.push(to),
            Some(t) if t.color != c => out.push(to),
            _ => {}
        }
    }
}

fn gen_king(board: &Board, from: Coord, c: Color, out: &mut Vec<Coord>) {
    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }
                let to = from + Coord::new(dx, dy, dz);
                if !to.in_bounds() {
                    continue;
                }
                match board.piece_at(to) {
                    None => out.push(to),
                    Some(t) if t.color != c => out.push(to),
                    _ => {}
                }
            }
        }
    }
}

fn gen_pawn(board: &Board, from: Coord, c: Color, out: &mut Vec<Coord>) {
    // Pawns stay on their level; white advances toward y = 0.
    let dir: i8 = match c {
        Color::White => -1,
        Color::Black => 1,
    };

    let forward = from + Coord::new(0, dir, 0);
    if forward.in_bounds() && board.piece_at(forward).is_none() {
        out.push(forward);
    }

    for dx in [-1, 1] {
        let diag = from + Coord::new(dx, dir, 0);
        if !diag.in_bounds() {
            continue;
        }
        if let Some(t) = board.piece_at(diag) {
            if t.color != c {
                out.push(diag);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
