//! Move representation.

use crate::{Piece, Square, SquareError};
use std::fmt;

/// A move request: a piece travels from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses coordinate notation such as "e2e4".
    pub fn from_coordinate(s: &str) -> Result<Self, SquareError> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(SquareError::InvalidName(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Ok(Move { from, to })
    }

    /// Returns true if `square` is either end of this move.
    #[inline]
    pub fn touches(self, square: Square) -> bool {
        self.from == square || self.to == square
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}

/// A move after it has been played on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mov: Move,
    /// The piece that moved, as it stood before any promotion.
    pub piece: Piece,
    /// The piece that stood on the destination, if any.
    pub captured: Option<Piece>,
    /// Whether the mover was a pawn that became a queen.
    pub promoted: bool,
}

impl AppliedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.mov.from, sep, self.mov.to)?;
        if self.promoted {
            write!(f, "=Q")?;
        }
        Ok(())
    }
}
