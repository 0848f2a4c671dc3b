//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::flip::{self, kogge, scan};
use crate::board::{solve_1, Board, Move, Square, SCORE_MIN};

use super::endgame::solve_1_reference;

/// Strategy to generate a random playout length
fn ply_strategy() -> impl Strategy<Value = usize> {
    0..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn random_board(seed: u64, plies: usize) -> Board {
    use rand::prelude::*;
    let mut rng = StdRng::seed_from_u64(seed);
    Board::random(plies, &mut rng)
}

proptest! {
    /// Property: every flip-engine variant returns an identical mask on
    /// every empty square of every reachable position
    #[test]
    fn prop_flip_variants_identical(seed in seed_strategy(), plies in ply_strategy()) {
        let board = random_board(seed, plies);
        let (p, o) = (board.mover().0, board.opponent().0);
        for x in board.empties().iter() {
            let reference = kogge::flip(x.index(), p, o);
            prop_assert_eq!(reference, scan::flip(x.index(), p, o));
            prop_assert_eq!(reference, flip::flip(x.index(), p, o));
        }
    }

    /// Property: a square is legal iff its flip mask is non-empty
    #[test]
    fn prop_legality_completeness(seed in seed_strategy(), plies in ply_strategy()) {
        let board = random_board(seed, plies);
        let moves = board.moves();
        for x in board.empties().iter() {
            prop_assert_eq!(
                moves.contains(x),
                !board.get_move(x).flips.is_empty()
            );
        }
    }

    /// Property: update followed by restore recovers the position
    /// bit-for-bit over whole random games
    #[test]
    fn prop_update_restore_roundtrip(seed in seed_strategy(), plies in ply_strategy()) {
        use rand::prelude::*;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut history: Vec<(Board, Move)> = Vec::new();

        for _ in 0..plies {
            if board.is_game_over() {
                break;
            }
            let moves = board.moves();
            if moves.is_empty() {
                let before = board;
                let mv = board.play(Square::PASS).unwrap();
                history.push((before, mv));
                continue;
            }
            let pick = rng.gen_range(0..moves.popcount());
            let x = moves.iter().nth(pick as usize).unwrap();
            let before = board;
            let mv = board.play(x).unwrap();
            history.push((before, mv));
        }

        while let Some((before, mv)) = history.pop() {
            board.undo(&mv);
            prop_assert_eq!(board, before);
        }
        prop_assert_eq!(board, Board::new());
    }

    /// Property: the move list always mirrors the legal-move mask
    #[test]
    fn prop_movelist_matches_mask(seed in seed_strategy(), plies in ply_strategy()) {
        let board = random_board(seed, plies);
        let list = board.generate_moves();
        list.assert_coherent();
        prop_assert_eq!(list.len(), board.moves().popcount() as usize);
        for mv in &list {
            prop_assert!(board.moves().contains(mv.x));
            prop_assert!(!mv.flips.is_empty());
        }
    }

    /// Property: the one-empty solver agrees with the general apply path
    /// when no cutoff applies
    #[test]
    fn prop_solve_1_consistent(seed in seed_strategy()) {
        let board = random_board(seed, 60);
        if board.count_empties() == 1 {
            let x = board.empties().iter().next().unwrap();
            prop_assert_eq!(
                solve_1(&board, SCORE_MIN, x),
                solve_1_reference(&board, x)
            );
        }
    }

    /// Property: text round-trip preserves the position
    #[test]
    fn prop_line_roundtrip(seed in seed_strategy(), plies in ply_strategy()) {
        let board = random_board(seed, plies);
        let parsed: Board = board.to_line().parse().unwrap();
        prop_assert_eq!(parsed, board);
    }

    /// Property: the hash is a pure function of the position and separates
    /// a position from its children
    #[test]
    fn prop_hash_depends_only_on_state(seed in seed_strategy(), plies in ply_strategy()) {
        let board = random_board(seed, plies);
        let parsed: Board = board.to_line().parse().unwrap();
        prop_assert_eq!(board.hash(), parsed.hash());

        if let Some(x) = board.moves().iter().next() {
            let child = board.next(&board.get_move(x));
            prop_assert_ne!(board.hash(), child.hash());
        }
    }
}
