//! Applying and reverting moves.
//!
//! `update`/`restore` are the unchecked hot-path pair used by search code:
//! pure XOR algebra over the two bitboards plus a side swap, exactly
//! invertible. `play`/`undo` wrap them with legality checking for callers
//! holding untrusted input.

use super::error::MoveError;
use super::flip;
use super::state::Board;
use super::types::{Bitboard, Move, Square};

impl Board {
    /// Build the move for `x`, computing its flip mask.
    ///
    /// `x` must be an empty board square; the flip engine performs no
    /// occupancy check, so an occupied square yields garbage flips.
    #[must_use]
    pub fn get_move(&self, x: Square) -> Move {
        debug_assert!(x.is_on_board());
        Move {
            x,
            flips: Bitboard(flip::flip(x.index(), self.mover.0, self.opponent.0)),
            ..Move::EMPTY
        }
    }

    /// Apply `mv` in place: flip the captured discs, place the played disc
    /// and swap the side to move. A pass (empty flip mask, zero square bit)
    /// degenerates to the side swap.
    pub fn update(&mut self, mv: &Move) {
        let mover = self.mover.0 ^ (mv.flips.0 | mv.x.bit());
        self.mover = Bitboard(self.opponent.0 ^ mv.flips.0);
        self.opponent = Bitboard(mover);
        self.check_invariant();
    }

    /// Exact inverse of [`Board::update`]
    pub fn restore(&mut self, mv: &Move) {
        let mover = self.opponent.0 ^ (mv.flips.0 | mv.x.bit());
        self.opponent = Bitboard(self.mover.0 ^ mv.flips.0);
        self.mover = Bitboard(mover);
        self.check_invariant();
    }

    /// The position after `mv`, leaving `self` untouched
    #[must_use]
    pub fn next(&self, mv: &Move) -> Board {
        let mut board = *self;
        board.update(mv);
        board
    }

    /// Swap the side to move without placing a disc
    pub fn pass(&mut self) {
        std::mem::swap(&mut self.mover, &mut self.opponent);
    }

    /// Checked apply: validates `x` before mutating.
    ///
    /// Passing is only legal when the side to move has no move. On success
    /// the applied move is returned for a later [`Board::undo`].
    pub fn play(&mut self, x: Square) -> Result<Move, MoveError> {
        if x == Square::PASS {
            if self.can_move() {
                return Err(MoveError::PassWithMoves);
            }
            self.pass();
            return Ok(Move::PASS);
        }

        if self.is_occupied(x) {
            return Err(MoveError::Occupied { x });
        }
        let mv = self.get_move(x);
        if mv.flips.is_empty() {
            return Err(MoveError::NoFlips { x });
        }
        self.update(&mv);
        Ok(mv)
    }

    /// Revert a move returned by [`Board::play`] (passes included)
    pub fn undo(&mut self, mv: &Move) {
        self.restore(mv);
    }
}
