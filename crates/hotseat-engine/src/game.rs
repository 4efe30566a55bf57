//! Game session: turn order, selection, move application and status.
//!
//! The [`GameSession`] is the single owned value a front-end holds. It only
//! changes through [`GameSession::select`] and [`GameSession::reset`]; every
//! other method is a read accessor.

use crate::movegen::{has_any_legal_move, is_king_in_check, legal_moves, Targets};
use crate::{Board, CaptureLedger};
use hotseat_core::{AppliedMove, Color, FenError, FenParser, Move, Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Derived state of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Side to move is not in check and has a legal move.
    #[default]
    Playing,
    /// Side to move is in check and has a legal move.
    Check,
    /// Side to move is in check with no legal move. Terminal.
    Checkmate,
    /// Side to move is not in check but has no legal move. Terminal, drawn.
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{}", s)
    }
}

/// What a call to [`GameSession::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: empty or opposing square with no selection, or the
    /// game is over.
    Ignored,
    /// A piece of the side to move is now selected.
    Selected,
    /// The active selection was cleared.
    Deselected,
    /// The selected piece moved.
    Moved(AppliedMove),
}

/// Errors when starting a session from a custom position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("{color} is in check but it is not {color}'s move")]
    OpponentInCheck { color: Color },
}

/// The whole state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: Color,
    status: GameStatus,
    selection: Option<Square>,
    destinations: Targets,
    ledger: CaptureLedger,
    last_move: Option<Move>,
    checked_king: Option<Color>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session on the standard board with White to move.
    pub fn new() -> Self {
        GameSession {
            board: Board::initial(),
            turn: Color::White,
            status: GameStatus::Playing,
            selection: None,
            destinations: Targets::new(),
            ledger: CaptureLedger::new(),
            last_move: None,
            checked_king: None,
        }
    }

    /// Creates a session from an arbitrary board.
    ///
    /// Each side must have exactly one king and the side not to move must not
    /// be in check. The status is derived right away, so a position that is
    /// already mate starts out as [`GameStatus::Checkmate`].
    pub fn from_board(board: Board, turn: Color) -> Result<Self, SetupError> {
        for color in Color::ALL {
            let count = board
                .pieces(color)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(SetupError::KingCount { color, count });
            }
        }
        if is_king_in_check(turn.opposite(), &board) {
            return Err(SetupError::OpponentInCheck {
                color: turn.opposite(),
            });
        }

        let mut session = GameSession {
            board,
            turn,
            ..Self::new()
        };
        session.refresh_status();
        Ok(session)
    }

    /// Creates a session from a FEN string (placement and side to move).
    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        let parsed = FenParser::parse(fen)?;
        Self::from_board(Board::from_placement(parsed.placement), parsed.active_color)
    }

    /// Replaces the session with a fresh game.
    pub fn reset(&mut self) {
        tracing::debug!("session reset");
        *self = Self::new();
    }

    /// Handles a square-selection event.
    ///
    /// With nothing selected, choosing a piece of the side to move selects it.
    /// With a selection active, choosing one of its legal destinations plays
    /// the move and any other square cancels the selection. Once the game is
    /// over every event is ignored until [`reset`](Self::reset).
    pub fn select(&mut self, square: Square) -> SelectOutcome {
        if self.status.is_terminal() {
            return SelectOutcome::Ignored;
        }

        match self.selection {
            None => match self.board.piece_at(square) {
                Some(piece) if piece.color == self.turn => {
                    self.destinations = legal_moves(piece, square, &self.board);
                    self.selection = Some(square);
                    tracing::debug!(
                        %square,
                        %piece,
                        destinations = self.destinations.len(),
                        "piece selected"
                    );
                    SelectOutcome::Selected
                }
                _ => SelectOutcome::Ignored,
            },
            Some(from) => {
                if self.destinations.contains(square) {
                    SelectOutcome::Moved(self.apply_move(from, square))
                } else {
                    tracing::debug!(%from, %square, "selection cleared");
                    self.clear_selection();
                    SelectOutcome::Deselected
                }
            }
        }
    }

    /// Plays a move already certified by the legal filter.
    fn apply_move(&mut self, from: Square, to: Square) -> AppliedMove {
        let mover = self.turn;
        let captured = self.board.relocate(from, to);
        let Some(mut piece) = self.board.piece_at(to) else {
            unreachable!("selection {} holds no piece", from);
        };
        let moved = piece;

        if let Some(taken) = captured {
            self.ledger.record(mover, taken);
        }

        let promoted =
            piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row();
        if promoted {
            piece = Piece::new(piece.color, PieceKind::Queen);
            self.board.set(to, Some(piece));
        }

        let mov = Move::new(from, to);
        self.last_move = Some(mov);
        self.clear_selection();
        self.turn = mover.opposite();
        self.refresh_status();

        let applied = AppliedMove {
            mov,
            piece: moved,
            captured,
            promoted,
        };
        tracing::debug!(%applied, turn = %self.turn, status = %self.status, "move applied");
        if self.status.is_terminal() {
            tracing::info!(status = %self.status, "game over: {}", self.status_message());
        }
        applied
    }

    /// Recomputes check and status for the side to move.
    fn refresh_status(&mut self) {
        let in_check = is_king_in_check(self.turn, &self.board);
        let can_move = has_any_legal_move(self.turn, &self.board);
        self.checked_king = in_check.then_some(self.turn);
        self.status = match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (true, true) => GameStatus::Check,
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Playing,
        };
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.destinations = Targets::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The currently selected square, if any.
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Legal destinations of the current selection; empty without one.
    pub fn destinations(&self) -> &Targets {
        &self.destinations
    }

    pub fn ledger(&self) -> &CaptureLedger {
        &self.ledger
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Color of the king currently in check, if any.
    pub fn checked_king(&self) -> Option<Color> {
        self.checked_king
    }

    /// Returns true once the game has reached checkmate or stalemate.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning side after checkmate.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.turn.opposite()),
            _ => None,
        }
    }

    /// Whether `square` is a legal destination that captures a piece.
    pub fn is_capture_target(&self, square: Square) -> bool {
        self.destinations.contains(square) && !self.board.is_empty(square)
    }

    /// Whether `square` is the origin or destination of the last move.
    pub fn is_last_move_square(&self, square: Square) -> bool {
        self.last_move.is_some_and(|m| m.touches(square))
    }

    /// One-line human readable status.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Playing => format!("{}'s Turn", self.turn),
            GameStatus::Check => format!("{} is in check!", self.turn),
            GameStatus::Checkmate => format!("Checkmate! {} wins!", self.turn.opposite()),
            GameStatus::Stalemate => "Stalemate! The game is a draw.".to_string(),
        }
    }
}
