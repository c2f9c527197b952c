use super::*;
use crate::position::Position;

fn find<'a>(moves: &'a [LegalMove], uci: &str) -> &'a LegalMove {
    moves
        .iter()
        .find(|m| m.uci() == uci)
        .unwrap_or_else(|| panic!("expected {uci} among {:?}", moves.iter().map(|m| m.uci()).collect::<Vec<_>>()))
}

#[test]
fn startpos_has_twenty_moves() {
    let moves = legal_moves(&Position::startpos());
    assert_eq!(moves.len(), 20);
}

#[test]
fn quiet_pawn_push_has_no_flags() {
    let moves = legal_moves(&Position::startpos());
    let mv = find(&moves, "e2e4");

    assert_eq!(mv.piece, Piece::Pawn);
    assert_eq!(mv.color, Color::White);
    assert_eq!(mv.captured, None);
    assert!(!mv.gives_check);
    assert!(!mv.gives_mate);
    assert_eq!(mv.castle, None);
    assert_eq!(mv.promotion, None);
}

#[test]
fn pawn_capture_classifies_the_victim() {
    // After 1.e4 d5, exd5 captures a pawn
    let pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
            .unwrap();
    let moves = legal_moves(&pos);
    let mv = find(&moves, "e4d5");

    assert_eq!(mv.captured, Some(Piece::Pawn));
    assert!(mv.is_capture());
}

#[test]
fn queen_capture_classifies_the_victim() {
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/3Q4/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    let mv = find(&moves, "d2d5");

    assert_eq!(mv.captured, Some(Piece::Queen));
}

#[test]
fn en_passant_is_a_pawn_capture_onto_an_empty_square() {
    // Black just played f7f5; e5xf6 e.p. is available
    let pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let moves = legal_moves(&pos);
    let mv = find(&moves, "e5f6");

    assert_eq!(mv.captured, Some(Piece::Pawn));
    assert_eq!(pos.piece_on(mv.to), None, "en passant destination is empty");
}

#[test]
fn castling_is_normalized_to_the_king_destination() {
    let pos = Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let moves = legal_moves(&pos);

    let short = find(&moves, "e1g1");
    assert_eq!(short.castle, Some(CastleSide::King));
    assert_eq!(short.captured, None, "castling captures nothing");

    let long = find(&moves, "e1c1");
    assert_eq!(long.castle, Some(CastleSide::Queen));
}

#[test]
fn promotion_carries_the_promoted_piece() {
    let pos = Position::from_fen("8/P7/8/8/8/8/k6K/8 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);

    let queen = find(&moves, "a7a8q");
    assert_eq!(queen.promotion, Some(Piece::Queen));
    assert!(
        queen.gives_check,
        "a queen on a8 checks the king down the a-file"
    );

    let knight = find(&moves, "a7a8n");
    assert_eq!(knight.promotion, Some(Piece::Knight));
    assert!(!knight.gives_check);
}

#[test]
fn back_rank_mate_sets_the_mate_flag() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    let mv = find(&moves, "a1a8");

    assert!(mv.gives_check);
    assert!(mv.gives_mate);

    let quiet = find(&moves, "a1a2");
    assert!(!quiet.gives_mate);
}
