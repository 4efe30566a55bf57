//! Core types for hotseat chess.
//!
//! This crate provides the value types shared by the rules engine and its
//! front-ends:
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`] for `(row, col)` board addresses and algebraic names
//! - [`Move`] and [`AppliedMove`] for move representation
//! - FEN piece-placement parsing

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser, Placement};
pub use mov::{AppliedMove, Move};
pub use piece::{Piece, PieceKind};
pub use square::{Square, SquareError};
