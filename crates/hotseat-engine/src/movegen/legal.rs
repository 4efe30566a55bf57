//! Legality filtering.
//!
//! A destination is legal when playing it on a scratch copy of the board
//! leaves the mover's king unattacked. Pins, moving into check and staying in
//! check are all rejected by that one rule, for every piece kind.

use super::{generate_moves, is_king_in_check, Targets};
use crate::Board;
use hotseat_core::{Color, Move, Piece, Square};

/// Returns the legal destinations of `piece` standing on `from`.
pub fn legal_moves(piece: Piece, from: Square, board: &Board) -> Targets {
    let mut targets = generate_moves(piece, from, board, false);
    targets.retain(|to| leaves_king_safe(piece.color, from, to, board));
    targets
}

/// Returns true if some piece of `color` has at least one legal move.
pub fn has_any_legal_move(color: Color, board: &Board) -> bool {
    board
        .pieces(color)
        .any(|(from, piece)| !legal_moves(piece, from, board).is_empty())
}

/// Enumerates every legal move of `color`, ordered by origin square.
pub fn all_legal_moves(color: Color, board: &Board) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, piece)| {
            legal_moves(piece, from, board)
                .iter()
                .map(move |to| Move::new(from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn leaves_king_safe(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let mut scratch = board.clone();
    scratch.relocate(from, to);
    !is_king_in_check(color, &scratch)
}
