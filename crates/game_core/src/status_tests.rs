use super::*;
use crate::moves::legal_moves;
use crate::position::Position;

fn classify_position(fen: &str) -> GameStatus {
    let pos = Position::from_fen(fen).unwrap();
    let moves = legal_moves(&pos);
    classify(&pos, pos.outcome(), &moves)
}

#[test]
fn start_position_is_ongoing() {
    assert_eq!(
        classify_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        GameStatus::Ongoing
    );
}

#[test]
fn attacked_king_classifies_as_check() {
    // 1.e4 f5 2.Qh5+, black king attacked by exactly one enemy piece
    assert_eq!(
        classify_position("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2"),
        GameStatus::Check
    );
}

#[test]
fn checkmate_takes_precedence_over_the_win_label() {
    assert_eq!(
        classify_position("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4"),
        GameStatus::Checkmate
    );
}

#[test]
fn stalemate_classifies_as_draw() {
    assert_eq!(classify_position("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1"), GameStatus::Draw);
}

#[test]
fn fifty_move_rule_classifies_as_draw() {
    assert_eq!(classify_position("8/8/8/4k3/8/4K3/8/8 w - - 100 60"), GameStatus::Draw);
}

#[test]
fn non_decisive_outcome_without_moves_is_left_ongoing() {
    // The rules engine owes us a decisive outcome whenever no moves remain;
    // the classifier does not second-guess it.
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(classify(&pos, Outcome::None, &[]), GameStatus::Ongoing);
}

#[test]
fn winner_labels_match_the_wire_contract() {
    assert_eq!(Outcome::WhiteWins(EndMethod::Checkmate).winner_label(), "white");
    assert_eq!(Outcome::BlackWins(EndMethod::Checkmate).winner_label(), "black");
    assert_eq!(Outcome::Draw(EndMethod::Stalemate).winner_label(), "draw");
    assert_eq!(Outcome::None.winner_label(), "");
}

#[test]
fn status_strings_match_the_wire_contract() {
    assert_eq!(GameStatus::Ongoing.to_string(), "ongoing");
    assert_eq!(GameStatus::Check.to_string(), "check");
    assert_eq!(GameStatus::Checkmate.to_string(), "checkmate");
    assert_eq!(GameStatus::Draw.to_string(), "draw");
    assert_eq!(GameStatus::WhiteWins.to_string(), "white_wins");
    assert_eq!(GameStatus::BlackWins.to_string(), "black_wins");
}
