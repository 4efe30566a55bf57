//! Attack and check detection.
//!
//! Every query regenerates the attacking side's moves in attack mode. The
//! board is small enough that no incremental attack map is kept.

use super::generate_moves;
use crate::Board;
use hotseat_core::{Color, Square};

/// Returns true if any piece of `by` covers `square`.
pub fn is_square_attacked(square: Square, by: Color, board: &Board) -> bool {
    board
        .pieces(by)
        .any(|(from, piece)| generate_moves(piece, from, board, true).contains(square))
}

/// Returns true if the king of `color` is attacked by the opponent.
///
/// A board without that king violates a game invariant; debug builds panic,
/// release builds report "not in check".
pub fn is_king_in_check(color: Color, board: &Board) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(king, color.opposite(), board),
        None => {
            debug_assert!(false, "{} king missing from board {:?}", color, board);
            false
        }
    }
}
