//! Whole-game scenarios driven through the public selection interface.

use hotseat_core::{Color, Move, Piece, PieceKind, Square};
use hotseat_engine::{
    generate_moves, initialize, legal_moves, reset, select, Board, GameSession, GameStatus,
    SelectOutcome,
};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn play_line(mut session: GameSession, line: &[&str]) -> GameSession {
    for coord in line {
        let m = Move::from_coordinate(coord).unwrap();
        session = select(session, m.from);
        assert_eq!(session.selection(), Some(m.from), "could not select {}", m.from);
        session = select(session, m.to);
        assert_eq!(session.last_move(), Some(m), "{} was not played", coord);
    }
    session
}

#[test]
fn initial_session() {
    let session = initialize();
    let board = session.board();
    assert_eq!(board.count(Color::White), 16);
    assert_eq!(board.count(Color::Black), 16);
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.status(), GameStatus::Playing);

    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (col, kind) in back.into_iter().enumerate() {
        let col = col as u8;
        assert_eq!(
            board.piece_at(Square::new(0, col).unwrap()),
            Some(Piece::new(Color::Black, kind))
        );
        assert_eq!(
            board.piece_at(Square::new(7, col).unwrap()),
            Some(Piece::new(Color::White, kind))
        );
        assert_eq!(
            board.piece_at(Square::new(1, col).unwrap()),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(
            board.piece_at(Square::new(6, col).unwrap()),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }
}

#[test]
fn fools_mate() {
    let session = play_line(initialize(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(session.status(), GameStatus::Checkmate);
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.winner(), Some(Color::Black));
    assert_eq!(session.checked_king(), Some(Color::White));
    assert_eq!(session.status_message(), "Checkmate! Black wins!");
}

#[test]
fn scholars_mate() {
    let session = play_line(
        initialize(),
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    assert_eq!(session.status(), GameStatus::Checkmate);
    assert_eq!(session.turn(), Color::Black);
    assert_eq!(session.winner(), Some(Color::White));
    assert_eq!(
        session.ledger().captured_by(Color::White),
        &[Piece::new(Color::Black, PieceKind::Pawn)]
    );
}

#[test]
fn illegal_destination_only_clears_selection() {
    let mut session = initialize();
    assert_eq!(session.select(sq("e2")), SelectOutcome::Selected);
    // Three squares forward is never a pawn move.
    assert_eq!(session.select(sq("e5")), SelectOutcome::Deselected);
    assert_eq!(session.selection(), None);
    assert!(session.destinations().is_empty());
    assert_eq!(session.board(), &Board::initial());
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.last_move(), None);
}

#[test]
fn pinned_bishop() {
    // White king e1, bishop e3, black rook e7.
    let board = Board::from_fen("4k3/4r3/8/8/8/4B3/8/4K3").unwrap();
    let bishop = board.piece_at(sq("e3")).unwrap();

    let pseudo = generate_moves(bishop, sq("e3"), &board, false);
    assert!(!pseudo.is_empty());
    assert!(pseudo.iter().all(|to| to.col() != 4));

    let legal = legal_moves(bishop, sq("e3"), &board);
    assert!(legal.iter().all(|to| to.col() == 4));
    assert!(legal.is_empty());
}

#[test]
fn pinned_piece_cannot_be_selected_into_a_move() {
    let mut session = GameSession::from_fen("4k3/4r3/8/8/8/4B3/8/4K3 w").unwrap();
    assert_eq!(session.select(sq("e3")), SelectOutcome::Selected);
    assert!(session.destinations().is_empty());
    assert_eq!(session.select(sq("d4")), SelectOutcome::Deselected);
    assert_eq!(session.turn(), Color::White);
}

#[test]
fn king_is_never_offered_as_a_target() {
    // Black is in check from the bishop; no legal move may land on e1.
    let session = play_line(initialize(), &["e2e4", "d7d6", "f1b5"]);
    assert_eq!(session.status(), GameStatus::Check);
    let black_moves = hotseat_engine::all_legal_moves(Color::Black, session.board());
    assert!(!black_moves.is_empty());
    assert!(black_moves.iter().all(|m| m.to != sq("e1")));
}

#[test]
fn capture_increments_only_the_capturer() {
    let session = play_line(initialize(), &["e2e4", "d7d5", "e4d5", "d8d5"]);
    assert_eq!(session.ledger().captured_by(Color::White).len(), 1);
    assert_eq!(session.ledger().captured_by(Color::Black).len(), 1);
    assert_eq!(
        session.ledger().captured_by(Color::Black),
        &[Piece::new(Color::White, PieceKind::Pawn)]
    );
    assert_eq!(
        session.board().piece_at(sq("d5")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(session.ledger().material_by(Color::White), 1);
}

#[test]
fn promotion_by_capture() {
    let session = play_line(
        GameSession::from_fen("rn2k3/1P6/8/8/8/8/8/4K3 w").unwrap(),
        &["b7a8"],
    );
    assert_eq!(
        session.board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
    assert_eq!(
        session.ledger().captured_by(Color::White),
        &[Piece::new(Color::Black, PieceKind::Rook)]
    );
}

#[test]
fn stalemate_after_a_move() {
    // Queen to f7 leaves the black king on h8 with no move and no check.
    let session = play_line(
        GameSession::from_fen("7k/8/6K1/8/8/8/8/5Q2 w").unwrap(),
        &["f1f7"],
    );
    assert_eq!(session.status(), GameStatus::Stalemate);
    assert_eq!(session.turn(), Color::Black);
    assert_eq!(session.checked_king(), None);
    assert!(session.is_over());
}

#[test]
fn reset_after_moves_matches_initialize() {
    let session = play_line(initialize(), &["e2e4", "d7d5", "e4d5", "g8f6"]);
    let session = select(session, sq("d1"));
    assert_eq!(reset(session), initialize());

    let mated = play_line(initialize(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(reset(mated), initialize());
}
