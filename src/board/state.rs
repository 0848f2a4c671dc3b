//! The two-bitboard position.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::zobrist::ZOBRIST;

use super::movegen::get_moves;
use super::types::{Bitboard, Square};

/// An Othello position: the side to move and its opponent, as bitboards.
///
/// The representation is colour-agnostic; `mover` always holds the discs of
/// the side to move, and applying a move swaps the two boards. The two masks
/// never overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) mover: Bitboard,
    pub(crate) opponent: Bitboard,
}

impl Board {
    /// The standard four-disc starting position
    #[must_use]
    pub fn new() -> Self {
        Board {
            mover: Bitboard(0x0000000810000000),    // e4, d5
            opponent: Bitboard(0x0000001008000000), // d4, e5
        }
    }

    /// Build a position from raw bitboards.
    ///
    /// # Panics
    /// Panics if the two masks overlap; an overlapping position is a
    /// programming error, not an input error.
    #[must_use]
    pub fn from_bitboards(mover: Bitboard, opponent: Bitboard) -> Self {
        assert!(
            mover.0 & opponent.0 == 0,
            "mover and opponent bitboards overlap"
        );
        Board { mover, opponent }
    }

    /// Discs of the side to move
    #[inline]
    #[must_use]
    pub const fn mover(&self) -> Bitboard {
        self.mover
    }

    /// Discs of the side not to move
    #[inline]
    #[must_use]
    pub const fn opponent(&self) -> Bitboard {
        self.opponent
    }

    /// All occupied squares
    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> Bitboard {
        Bitboard(self.mover.0 | self.opponent.0)
    }

    /// All empty squares
    #[inline]
    #[must_use]
    pub const fn empties(&self) -> Bitboard {
        Bitboard(!(self.mover.0 | self.opponent.0))
    }

    /// Number of empty squares
    #[inline]
    #[must_use]
    pub const fn count_empties(&self) -> u32 {
        self.empties().popcount()
    }

    #[inline]
    #[must_use]
    pub const fn count_mover(&self) -> u32 {
        self.mover.popcount()
    }

    #[inline]
    #[must_use]
    pub const fn count_opponent(&self) -> u32 {
        self.opponent.popcount()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, x: Square) -> bool {
        self.occupied().contains(x)
    }

    /// Squares where the side to move has at least one capturing line
    #[inline]
    #[must_use]
    pub fn moves(&self) -> Bitboard {
        get_moves(self.mover, self.opponent)
    }

    /// True if the side to move has at least one legal move
    #[inline]
    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.moves().is_empty()
    }

    /// True if the side to move must pass but the opponent can still play
    #[must_use]
    pub fn is_pass_forced(&self) -> bool {
        !self.can_move() && !get_moves(self.opponent, self.mover).is_empty()
    }

    /// True when neither side has a legal move
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.can_move() && get_moves(self.opponent, self.mover).is_empty()
    }

    /// Final disc differential from the mover's point of view, with empty
    /// squares credited to the winner.
    #[must_use]
    pub fn final_score(&self) -> i32 {
        let mut score = self.count_mover() as i32 - self.count_opponent() as i32;
        let empties = self.count_empties() as i32;
        if score < 0 {
            score -= empties;
        } else if score > 0 {
            score += empties;
        }
        score
    }

    /// 64-bit hash of the position, suitable for bucketing
    #[must_use]
    pub fn hash(&self) -> u64 {
        let mut h = 0;
        let mover = self.mover.0.to_le_bytes();
        let opponent = self.opponent.0.to_le_bytes();
        for (i, &b) in mover.iter().enumerate() {
            h ^= ZOBRIST.byte_keys[i][b as usize];
        }
        for (i, &b) in opponent.iter().enumerate() {
            h ^= ZOBRIST.byte_keys[i + 8][b as usize];
        }
        h
    }

    /// Play up to `n_plies` uniformly random legal moves from the starting
    /// position, passing when forced. Useful for tests and benchmarks.
    #[must_use]
    pub fn random(n_plies: usize, rng: &mut impl Rng) -> Board {
        let mut board = Board::new();
        let mut plies = 0;
        while plies < n_plies {
            if board.is_game_over() {
                break;
            }
            let moves = board.moves();
            if moves.is_empty() {
                board.pass();
                continue;
            }
            let pick = rng.gen_range(0..moves.popcount());
            for (i, x) in moves.iter().enumerate() {
                if i as u32 == pick {
                    let mv = board.get_move(x);
                    board.update(&mv);
                    break;
                }
            }
            plies += 1;
        }
        board
    }

    pub(crate) fn check_invariant(&self) {
        debug_assert!(
            self.mover.0 & self.opponent.0 == 0,
            "mover and opponent bitboards overlap"
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
