//! Text rendering of a game session.

use crate::config::{Config, GlyphStyle};
use hotseat_core::{Color, Piece, Square};
use hotseat_engine::GameSession;
use std::fmt::Write;

/// Draws the board, status line and capture panels.
///
/// Each square is three characters wide:
/// - `(P)` the selected piece
/// - ` * ` an empty legal destination, `[p]` a capturing one
/// - `!K!` a king in check
/// - `<P>` either end of the last move
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    glyphs: GlyphStyle,
    show_coordinates: bool,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Renderer {
            glyphs: config.glyphs,
            show_coordinates: config.show_coordinates,
        }
    }

    fn piece_char(&self, piece: Option<Piece>) -> char {
        match (piece, self.glyphs) {
            (None, _) => '.',
            (Some(p), GlyphStyle::Unicode) => p.glyph(),
            (Some(p), GlyphStyle::Ascii) => p.to_fen_char(),
        }
    }

    fn cell(&self, session: &GameSession, square: Square) -> String {
        let piece = session.board().piece_at(square);
        let c = self.piece_char(piece);
        let checked = session
            .checked_king()
            .is_some_and(|color| session.board().king_square(color) == Some(square));

        if session.selection() == Some(square) {
            format!("({})", c)
        } else if session.is_capture_target(square) {
            format!("[{}]", c)
        } else if session.destinations().contains(square) {
            " * ".to_string()
        } else if checked {
            format!("!{}!", c)
        } else if session.is_last_move_square(square) {
            format!("<{}>", c)
        } else {
            format!(" {} ", c)
        }
    }

    /// Renders the board diagram.
    pub fn board(&self, session: &GameSession) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            if self.show_coordinates {
                let _ = write!(out, "{} ", 8 - row);
            }
            for col in 0..8u8 {
                if let Some(square) = Square::new(row, col) {
                    out.push_str(&self.cell(session, square));
                }
            }
            out.push('\n');
        }
        if self.show_coordinates {
            out.push_str("  ");
            for file in 'a'..='h' {
                let _ = write!(out, " {} ", file);
            }
            out.push('\n');
        }
        out
    }

    /// Renders the "has captured" panel for one side.
    pub fn captures(&self, session: &GameSession, capturer: Color) -> String {
        let taken = session.ledger().captured_by(capturer);
        if taken.is_empty() {
            return format!("{} has captured: none", capturer);
        }
        let pieces: Vec<String> = taken
            .iter()
            .map(|p| self.piece_char(Some(*p)).to_string())
            .collect();
        format!(
            "{} has captured: {} (+{})",
            capturer,
            pieces.join(" "),
            session.ledger().material_by(capturer)
        )
    }

    /// Renders the full screen: board, status line and both capture panels.
    pub fn screen(&self, session: &GameSession) -> String {
        let mut out = self.board(session);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", session.status_message());
        for color in Color::ALL {
            let _ = writeln!(out, "{}", self.captures(session, color));
        }
        out
    }
}
