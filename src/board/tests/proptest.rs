//! Property-based tests using proptest.

use crate::board::{Color, Move, Position};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position.
fn random_position(seed: u64, num_moves: usize) -> Position {
    use rand::prelude::*;

    let mut position = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = position.legal_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        position.make_move(moves[idx]);
    }
    position
}

fn sorted(moves: impl IntoIterator<Item = Move>) -> Vec<String> {
    let mut list: Vec<String> = moves.into_iter().map(|m| m.to_string()).collect();
    list.sort();
    list
}

proptest! {
    /// Property: make_move followed by undo_move restores the position exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut position = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial_fen = position.to_fen();

        for _ in 0..num_moves {
            let moves = position.legal_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            position.make_move(moves[idx]);
        }

        while !position.move_log().is_empty() {
            position.undo_move();
        }

        prop_assert_eq!(position.to_fen(), initial_fen);
        prop_assert_eq!(position.king_square(Color::White), crate::board::Square(7, 4));
        prop_assert_eq!(position.king_square(Color::Black), crate::board::Square(0, 4));
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = random_position(seed, num_moves);
        let mover = position.side_to_move();

        for mv in position.legal_moves().iter() {
            position.make_move(*mv);
            prop_assert!(!position.is_king_attacked(mover),
                "Legal move left king in check: {:?}", mv);
            position.undo_move();
        }
    }

    /// Property: the legal set equals the pseudo-legal set filtered by
    /// playing each move and testing the mover's king
    #[test]
    fn prop_legal_matches_brute_force_filter(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = random_position(seed, num_moves);
        let mover = position.side_to_move();

        let mut filtered = Vec::new();
        for mv in position.pseudo_legal_moves().iter() {
            position.make_move(*mv);
            if !position.is_king_attacked(mover) {
                filtered.push(*mv);
            }
            position.undo_move();
        }

        let legal = position.legal_moves();
        prop_assert_eq!(sorted(legal), sorted(filtered));
    }

    /// Property: cached king squares always match the board
    #[test]
    fn prop_king_squares_match_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let position = random_position(seed, num_moves);
        for color in Color::BOTH {
            prop_assert_eq!(position.board().kings(color), vec![position.king_square(color)]);
        }
    }

    /// Property: FEN round-trip preserves the board and side to move
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let position = random_position(seed, num_moves);
        let restored = Position::from_fen(&position.to_fen());

        prop_assert_eq!(restored.board(), position.board());
        prop_assert_eq!(restored.white_to_move(), position.white_to_move());
    }

    /// Property: the in-check flag agrees with a fresh check query
    #[test]
    fn prop_in_check_flag_is_fresh(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = random_position(seed, num_moves);
        position.legal_moves();
        prop_assert_eq!(position.in_check(), position.is_in_check());
        prop_assert_eq!(position.in_check(), !position.checks().is_empty());
    }
}
