//! FEN (Forsyth-Edwards Notation) parsing.
//!
//! Only the piece placement and active color fields carry meaning here.
//! Castling, en passant and the move clocks may be present so that ordinary
//! FEN strings parse, but they are ignored.

use crate::{Color, Piece};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Piece grid indexed `[row][col]`, row 0 being rank 8.
pub type Placement = [[Option<Piece>; 8]; 8];

/// Parsed FEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    pub placement: Placement,
    /// Side to move; White when the field is absent.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    /// Parses a FEN string. Fields after the active color are ignored.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_placement(parts[0])?;

        let active_color = match parts.get(1) {
            None | Some(&"w") => Color::White,
            Some(&"b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            placement,
            active_color,
        })
    }

    /// Parses the piece placement field alone.
    pub fn parse_placement(placement: &str) -> Result<Placement, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut grid: Placement = [[None; 8]; 8];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < 8 {
                        grid[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(grid)
    }

    /// Serializes a grid back into the placement field.
    pub fn placement_to_string(grid: &Placement) -> String {
        let mut fen = String::new();
        for (row, rank) in grid.iter().enumerate() {
            let mut empty = 0;
            for square in rank {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }
}
