//! Check, double check, checkmate and stalemate tests.

use super::notations;
use crate::board::{Check, Color, GameStatus, Position, Square};

#[test]
fn test_single_rook_check_block_or_step_aside() {
    let mut position = Position::from_fen("4r2k/8/8/R7/8/8/3B4/4K3 w - - 0 1");
    let moves = position.legal_moves();

    assert!(position.in_check());
    assert_eq!(
        position.checks(),
        &[Check {
            square: Square(0, 4),
            direction: (-1, 0),
        }]
    );
    assert_eq!(
        notations(&moves),
        vec!["a5e5", "d2e3", "e1d1", "e1f1", "e1f2"]
    );
}

#[test]
fn test_knight_check_cannot_be_blocked() {
    let mut position = Position::from_fen("4k3/8/3R4/8/8/3n4/8/4K3 w - - 0 1");
    let moves = position.legal_moves();

    assert_eq!(position.checks().len(), 1);
    assert_eq!(position.checks()[0].direction, (-2, -1));
    assert!(!position.checks()[0].is_ray());
    assert_eq!(
        notations(&moves),
        vec!["d6d3", "e1d1", "e1d2", "e1e2", "e1f1"]
    );
}

#[test]
fn test_double_check_allows_only_king_moves() {
    let mut position = Position::from_fen("4r2k/8/8/8/8/3n4/2B5/4K3 w - - 0 1");
    let moves = position.legal_moves();

    assert_eq!(position.checks().len(), 2);
    assert!(moves.iter().all(|m| m.is_king_move()));
    assert_eq!(notations(&moves), vec!["e1d1", "e1d2", "e1f1"]);
}

#[test]
fn test_pawn_gives_check_only_diagonally_forward() {
    // black pawn on d2 attacks e1
    let mut position = Position::from_fen("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1");
    position.legal_moves();
    assert!(position.in_check());

    // black pawn on e2 sits in front of the king and does not
    let mut position = Position::from_fen("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1");
    position.legal_moves();
    assert!(!position.in_check());

    // white pawn on d7 attacks the black king on e8
    let mut position = Position::from_fen("4k3/3P4/8/8/8/8/8/4K3 b - - 0 1");
    position.legal_moves();
    assert!(position.in_check());

    // a white pawn that has passed the black king does not
    let mut position = Position::from_fen("8/3P4/4k3/8/8/8/8/4K3 b - - 0 1");
    position.legal_moves();
    assert!(!position.in_check());
}

#[test]
fn test_king_cannot_step_back_along_checking_ray() {
    let mut position = Position::from_fen("4k3/8/8/8/4r3/8/4K3/8 w - - 0 1");
    let moves = position.legal_moves();
    assert_eq!(
        notations(&moves),
        vec!["e2d1", "e2d2", "e2d3", "e2f1", "e2f2", "e2f3"]
    );
}

#[test]
fn test_king_cannot_approach_enemy_king() {
    let mut position = Position::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    let moves = position.legal_moves();
    assert_eq!(
        notations(&moves),
        vec!["d3c2", "d3c3", "d3d2", "d3e2", "d3e3"]
    );
}

#[test]
fn test_king_takes_undefended_checker() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/4q3/4K3 w - - 0 1");
    let moves = position.legal_moves();
    assert_eq!(notations(&moves), vec!["e1e2"]);
    assert!(moves[0].is_capture());
}

#[test]
fn test_defended_checker_is_mate() {
    let mut position = Position::from_fen("4k3/8/8/8/5n2/8/4q3/4K3 w - - 0 1");
    assert!(position.legal_moves().is_empty());
    assert!(position.is_checkmate());
    assert!(!position.is_stalemate());
    assert_eq!(
        position.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn test_back_rank_mate() {
    let mut position = Position::from_fen("4R1k1/5ppp/8/8/8/8/8/7K b - - 0 1");
    assert!(position.is_checkmate());
    assert_eq!(
        position.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_stalemate_position() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(position.legal_moves().is_empty());
    assert!(!position.in_check());
    assert!(position.is_stalemate());
    assert!(!position.is_checkmate());
    assert_eq!(position.status(), GameStatus::Stalemate);
}

#[test]
fn test_fools_mate() {
    let mut position = Position::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mv = position.parse_move(text).unwrap();
        position.make_move(mv);
    }
    assert!(position.is_checkmate());
    assert!(position.is_in_check());
}

#[test]
fn test_fresh_check_query_matches_last_computed_flag() {
    let mut position = Position::from_fen("4r2k/8/8/R7/8/8/3B4/4K3 w - - 0 1");
    assert!(position.is_in_check());
    assert!(!position.in_check());
    position.legal_moves();
    assert!(position.in_check());
    assert!(position.detect_checks_and_pins().in_check);
}
