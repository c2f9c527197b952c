use super::*;
use crate::position::Position;

#[test]
fn knight_and_pawns_attack_c3_from_the_start_position() {
    let pos = Position::startpos();
    let atk = attackers_to(pos.board(), Square::C3, Color::White);

    assert!(atk.has(Square::B1), "knight on b1 attacks c3");
    assert!(atk.has(Square::B2), "pawn on b2 attacks c3");
    assert!(atk.has(Square::D2), "pawn on d2 attacks c3");
    assert!(!atk.has(Square::C2), "a pawn does not attack straight ahead");
}

#[test]
fn pawn_attacks_are_directional() {
    // Lone white pawn on e4, black pawn on d5
    let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();

    assert!(is_attacked_by(pos.board(), Square::D5, Color::White));
    assert!(is_attacked_by(pos.board(), Square::F5, Color::White));
    assert!(is_attacked_by(pos.board(), Square::E4, Color::Black));
    assert!(
        !is_attacked_by(pos.board(), Square::E5, Color::White),
        "white pawn on e4 does not attack e5"
    );
}

#[test]
fn sliding_attacks_respect_blockers() {
    // Rook a1 with its own pawn on a2; e1 king blocks the first rank
    let pos = Position::from_fen("4k3/8/8/8/8/8/P7/R3K3 w - - 0 1").unwrap();

    assert!(
        !is_attacked_by(pos.board(), Square::A8, Color::White),
        "pawn on a2 blocks the rook's file"
    );
    assert!(
        is_attacked_by(pos.board(), Square::A2, Color::White),
        "a defended own square still counts as attacked"
    );
    assert!(
        !is_attacked_by(pos.board(), Square::H1, Color::White),
        "the king on e1 blocks the rook's rank"
    );
    assert!(is_attacked_by(pos.board(), Square::D1, Color::White));
}

#[test]
fn queen_attacks_along_rays() {
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/8/4K3 b - - 0 1").unwrap();

    assert!(is_attacked_by(pos.board(), Square::D1, Color::Black));
    assert!(is_attacked_by(pos.board(), Square::A5, Color::Black));
    assert!(is_attacked_by(pos.board(), Square::H1, Color::Black));
    assert!(!is_attacked_by(pos.board(), Square::C1, Color::Black));
}
