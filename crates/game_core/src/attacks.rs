//! Square-attack detection over the rules engine's lookup tables.
//!
//! Used for two things: deciding whether the side to move stands in check
//! (status classification) and whether a queen/rook destination hangs the
//! piece (blunder penalty). Legal-move lists cannot answer either question
//! here because `cozy_chess` only enumerates moves for the side to move,
//! so enemy attacks never appear in them.

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, Piece, Square,
};

/// All pieces of `by` that attack `sq` under the current occupancy.
pub fn attackers_to(board: &Board, sq: Square, by: Color) -> BitBoard {
    let occupied = board.occupied();
    let rooks = board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    let bishops = board.pieces(Piece::Bishop) | board.pieces(Piece::Queen);

    let mut attackers = BitBoard::EMPTY;
    attackers |= get_knight_moves(sq) & board.pieces(Piece::Knight);
    attackers |= get_king_moves(sq) & board.pieces(Piece::King);
    // A pawn of `by` attacks sq iff a pawn of the other color on sq would attack it back
    attackers |= get_pawn_attacks(sq, !by) & board.pieces(Piece::Pawn);
    attackers |= get_rook_moves(sq, occupied) & rooks;
    attackers |= get_bishop_moves(sq, occupied) & bishops;

    attackers & board.colors(by)
}

pub fn is_attacked_by(board: &Board, sq: Square, by: Color) -> bool {
    !attackers_to(board, sq, by).is_empty()
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
