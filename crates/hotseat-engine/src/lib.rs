//! Rules engine for two players sharing one device.
//!
//! This crate provides:
//! - [`Board`] - 8x8 piece placement with the standard initial setup
//! - [`movegen`] - pseudo-legal generation, attack detection and legality filtering
//! - [`CaptureLedger`] - captured pieces per capturing side
//! - [`GameSession`] - turn order, selection handling and game status
//!
//! # Architecture
//!
//! Move generation is a plain mailbox walk over the 8x8 grid. Check detection
//! regenerates the attacker's moves and legality is decided by playing each
//! candidate on a scratch copy of the board. The board is small enough that
//! none of this is cached.
//!
//! # Example
//!
//! ```
//! use hotseat_core::Square;
//! use hotseat_engine::{GameStatus, SelectOutcome};
//!
//! let sq = |s: &str| Square::from_algebraic(s).unwrap();
//!
//! let mut session = hotseat_engine::initialize();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     session = hotseat_engine::select(session, sq(from));
//!     session = hotseat_engine::select(session, sq(to));
//! }
//! assert_eq!(session.status(), GameStatus::Checkmate);
//! assert_eq!(session.status_message(), "Checkmate! Black wins!");
//!
//! let mut session = hotseat_engine::reset(session);
//! assert_eq!(session.select(sq("e2")), SelectOutcome::Selected);
//! ```

mod board;
mod game;
mod ledger;
pub mod movegen;

pub use board::Board;
pub use game::{GameSession, GameStatus, SelectOutcome, SetupError};
pub use ledger::CaptureLedger;
pub use movegen::{
    all_legal_moves, generate_moves, has_any_legal_move, is_king_in_check, is_square_attacked,
    legal_moves, Targets,
};

/// Starts a new game on the standard board, White to move.
pub fn initialize() -> GameSession {
    GameSession::new()
}

/// Feeds one square-selection event into `session` and returns it.
pub fn select(mut session: GameSession, square: hotseat_core::Square) -> GameSession {
    session.select(square);
    session
}

/// Discards `session` and returns a fresh game.
pub fn reset(mut session: GameSession) -> GameSession {
    session.reset();
    session
}
