//! Move generation.
//!
//! Pseudo-legal generation lives here; [`attacks`] builds check detection on
//! top of it and [`legal`] narrows the result to moves that keep the mover's
//! king safe.

pub mod attacks;
pub mod legal;

use crate::Board;
use hotseat_core::{Piece, PieceKind, Square};

pub use attacks::{is_king_in_check, is_square_attacked};
pub use legal::{all_legal_moves, has_any_legal_move, legal_moves};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Destination squares for a single piece, with a fixed maximum capacity.
///
/// A queen in the open reaches 27 squares, so 32 slots avoid any heap
/// allocation during generation.
#[derive(Clone)]
pub struct Targets {
    squares: [Option<Square>; Self::MAX_TARGETS],
    len: usize,
}

impl Targets {
    /// Upper bound on destinations of any one piece.
    pub const MAX_TARGETS: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Targets {
            squares: [None; Self::MAX_TARGETS],
            len: 0,
        }
    }

    /// Adds a destination to the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!(self.len < Self::MAX_TARGETS);
        self.squares[self.len] = Some(sq);
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.iter().any(|s| s == sq)
    }

    /// Iterates over the destinations in generation order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares[..self.len].iter().flatten().copied()
    }

    /// Retains only destinations for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Square) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if let Some(sq) = self.squares[read] {
                if f(sq) {
                    self.squares[write] = Some(sq);
                    write += 1;
                }
            }
        }
        for slot in &mut self.squares[write..self.len] {
            *slot = None;
        }
        self.len = write;
    }

    /// Copies the destinations into a vector.
    pub fn to_vec(&self) -> Vec<Square> {
        self.iter().collect()
    }
}

impl Default for Targets {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Targets {
    fn eq(&self, other: &Self) -> bool {
        self.squares[..self.len] == other.squares[..other.len]
    }
}

impl Eq for Targets {}

impl std::fmt::Debug for Targets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Generates pseudo-legal destinations for `piece` standing on `from`.
///
/// Whose turn it is and the safety of the mover's own king are ignored. In
/// `attack_mode` pawns offer both forward diagonals whether or not anything
/// stands there, so that empty squares still count as covered.
pub fn generate_moves(piece: Piece, from: Square, board: &Board, attack_mode: bool) -> Targets {
    let mut targets = Targets::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, from, board, attack_mode, &mut targets),
        PieceKind::Rook => {
            slide_moves(piece, from, board, &ROOK_DIRECTIONS, &mut targets);
        }
        PieceKind::Bishop => {
            slide_moves(piece, from, board, &BISHOP_DIRECTIONS, &mut targets);
        }
        PieceKind::Queen => {
            slide_moves(piece, from, board, &ROOK_DIRECTIONS, &mut targets);
            slide_moves(piece, from, board, &BISHOP_DIRECTIONS, &mut targets);
        }
        PieceKind::Knight => step_moves(piece, from, board, &KNIGHT_OFFSETS, &mut targets),
        PieceKind::King => step_moves(piece, from, board, &KING_OFFSETS, &mut targets),
    }
    targets
}

fn pawn_moves(piece: Piece, from: Square, board: &Board, attack_mode: bool, out: &mut Targets) {
    let dir = piece.color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            out.push(one);
            if from.row() == piece.color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diag) = from.offset(dir, d_col) else {
            continue;
        };
        let holds_enemy = board
            .piece_at(diag)
            .is_some_and(|target| target.color != piece.color);
        if attack_mode || holds_enemy {
            out.push(diag);
        }
    }
}

fn slide_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    directions: &[(i8, i8)],
    out: &mut Targets,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

fn step_moves(piece: Piece, from: Square, board: &Board, offsets: &[(i8, i8)], out: &mut Targets) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if board.piece_at(to).map_or(true, |p| p.color != piece.color) {
                out.push(to);
            }
        }
    }
}
