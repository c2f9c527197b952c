//! Legal-move enumeration, enriched with the flags the heuristics need.
//!
//! The rules engine hands out bare from/to/promotion triples; scoring and
//! disambiguation additionally need to know what is being captured, whether
//! the move checks or mates, and whether it castles. We compute those once
//! per enumeration so downstream code never re-derives them.

use std::fmt;

use cozy_chess::{Board, Color, File, Move, Piece, Square};

use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

/// One legal move, as enumerated for the current position.
///
/// `from`/`to` are the conventional squares (for castling, `to` is the
/// king's landing square, not the rook's). The raw rules-engine move is
/// kept alongside because `cozy_chess` encodes castling as king-takes-rook
/// and needs that form back when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalMove {
    raw: Move,
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    /// The captured piece, classified from board state at the destination
    /// before the move is applied (pawn for en passant).
    pub captured: Option<Piece>,
    pub gives_check: bool,
    pub gives_mate: bool,
    pub castle: Option<CastleSide>,
    pub promotion: Option<Piece>,
}

impl LegalMove {
    pub fn raw(&self) -> Move {
        self.raw
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    /// Lowercase coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn uci(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo_char(promo))?;
        }
        Ok(())
    }
}

fn promo_char(piece: Piece) -> char {
    match piece {
        Piece::Queen => 'q',
        Piece::Rook => 'r',
        Piece::Bishop => 'b',
        Piece::Knight => 'n',
        _ => 'q',
    }
}

/// Enumerates all legal moves for the side to move, in the rules engine's
/// fixed order.
pub fn legal_moves(pos: &Position) -> Vec<LegalMove> {
    let board = pos.board();
    let mut raw_moves = Vec::with_capacity(64);
    board.generate_moves(|set| {
        raw_moves.extend(set);
        false
    });
    raw_moves.into_iter().map(|raw| enrich(board, raw)).collect()
}

fn enrich(board: &Board, raw: Move) -> LegalMove {
    let stm = board.side_to_move();
    let piece = board
        .piece_on(raw.from)
        .expect("move generator yields occupied origin squares");

    // cozy_chess encodes castling as the king capturing its own rook
    let castle = if piece == Piece::King && board.color_on(raw.to) == Some(stm) {
        if (raw.to.file() as u8) > (raw.from.file() as u8) {
            Some(CastleSide::King)
        } else {
            Some(CastleSide::Queen)
        }
    } else {
        None
    };

    let to = match castle {
        Some(CastleSide::King) => Square::new(File::G, raw.from.rank()),
        Some(CastleSide::Queen) => Square::new(File::C, raw.from.rank()),
        None => raw.to,
    };

    let captured = if let Some(victim) = board.piece_on(raw.to) {
        if board.color_on(raw.to) == Some(stm) {
            None // own rook on a castle move
        } else {
            Some(victim)
        }
    } else if piece == Piece::Pawn && raw.from.file() != raw.to.file() {
        // en passant: the captured pawn is not on the destination square
        Some(Piece::Pawn)
    } else {
        None
    };

    let mut next = board.clone();
    next.play_unchecked(raw);
    let gives_check = !next.checkers().is_empty();
    let gives_mate = gives_check && !next.generate_moves(|_| true);

    LegalMove {
        raw,
        from: raw.from,
        to,
        piece,
        color: stm,
        captured,
        gives_check,
        gives_mate,
        castle,
        promotion: raw.promotion,
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
