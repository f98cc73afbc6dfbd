use std::fmt;
use std::ops::Add;

/// Cells per row/column of one level.
pub const BOARD_SIZE: i8 = 8;
/// Number of stacked levels.
pub const LEVEL_COUNT: i8 = 3;
/// Total cell count of the cubic grid.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize) * (LEVEL_COUNT as usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// One-letter tag used in move logs.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// A lattice point on the cubic board. `z` selects the level.
///
/// Addition is component-wise and unchecked; `in_bounds` is the sole
/// validity predicate and callers validate before indexing the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x)
            && (0..BOARD_SIZE).contains(&self.y)
            && (0..LEVEL_COUNT).contains(&self.z)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A (piece, destination) pair as enumerated for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannedMove {
    pub from: Coord,
    pub to: Coord,
}

impl PlannedMove {
    pub fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for PlannedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
