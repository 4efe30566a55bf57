//! Captured pieces, per capturing side.

use hotseat_core::{Color, Piece};

/// Append-only record of captures.
///
/// Each captured piece is filed under the color that made the capture, in the
/// order the captures happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureLedger {
    captures: [Vec<Piece>; 2],
}

impl CaptureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `capturer` took `piece`.
    pub fn record(&mut self, capturer: Color, piece: Piece) {
        debug_assert_ne!(capturer, piece.color, "a side cannot capture its own piece");
        self.captures[capturer.index()].push(piece);
    }

    /// Pieces taken by `capturer`, oldest first.
    pub fn captured_by(&self, capturer: Color) -> &[Piece] {
        &self.captures[capturer.index()]
    }

    /// Total conventional value of the pieces taken by `capturer`.
    pub fn material_by(&self, capturer: Color) -> u32 {
        self.captured_by(capturer)
            .iter()
            .map(|p| p.kind.value())
            .sum()
    }

    /// Number of captures across both sides.
    pub fn len(&self) -> usize {
        self.captures.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_core::PieceKind;

    #[test]
    fn records_in_order_under_capturer() {
        let mut ledger = CaptureLedger::new();
        ledger.record(Color::White, Piece::new(Color::Black, PieceKind::Pawn));
        ledger.record(Color::Black, Piece::new(Color::White, PieceKind::Knight));
        ledger.record(Color::White, Piece::new(Color::Black, PieceKind::Queen));

        assert_eq!(
            ledger.captured_by(Color::White),
            &[
                Piece::new(Color::Black, PieceKind::Pawn),
                Piece::new(Color::Black, PieceKind::Queen),
            ]
        );
        assert_eq!(
            ledger.captured_by(Color::Black),
            &[Piece::new(Color::White, PieceKind::Knight)]
        );
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn material_totals() {
        let mut ledger = CaptureLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.material_by(Color::White), 0);

        ledger.record(Color::White, Piece::new(Color::Black, PieceKind::Rook));
        ledger.record(Color::White, Piece::new(Color::Black, PieceKind::Bishop));
        assert_eq!(ledger.material_by(Color::White), 8);
        assert_eq!(ledger.material_by(Color::Black), 0);
    }
}
