//! 8x8 piece placement.

use hotseat_core::{Color, FenError, FenParser, Piece, PieceKind, Placement, Square};
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The board: one optional piece per square.
///
/// Plain data, so `Clone` yields a fully independent copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Placement,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting setup, Black on rows 0-1, White on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let home = color.home_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[home][col] = Some(Piece::new(color, *kind));
                board.squares[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Builds a board from the piece placement field of a FEN string.
    pub fn from_fen(placement: &str) -> Result<Self, FenError> {
        Ok(Board {
            squares: FenParser::parse_placement(placement)?,
        })
    }

    pub(crate) fn from_placement(squares: Placement) -> Self {
        Board { squares }
    }

    /// Serializes the board as a FEN piece placement field.
    pub fn to_fen(&self) -> String {
        FenParser::placement_to_string(&self.squares)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Places `piece` on `square`, or clears it.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Removes and returns whatever stood on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Moves the piece on `from` to `to`, returning what stood on `to`.
    ///
    /// No promotion or other side effect happens here.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let captured = self.take(to);
        self.set(to, moving);
        captured
    }

    /// Iterates over the occupied squares of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Finds the king of `color`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for square in rank {
                let c = square.map_or('.', |p| p.to_fen_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
