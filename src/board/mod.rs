//! Othello board representation and move logic.
//!
//! Positions are a pair of bitboards (side to move / opponent); flip
//! computation, move generation and the endgame fast path are all
//! bit-parallel over that pair.
//!
//! # Example
//! ```
//! use othello_engine::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod endgame;
mod error;
pub mod flip;
mod make_unmake;
mod movegen;
mod notation;
mod state;
mod symmetry;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{MoveError, ParseError};
pub use state::Board;
pub use types::{BestMoves, Bitboard, BitboardIter, Move, MoveList, Square, MAX_MOVES};

// Public API - board metrics consumed by move ordering and evaluation
pub use endgame::{count_last_flip, solve_1};
pub use movegen::{corner_stability, get_moves, mobility, potential_mobility, weighted_mobility};

/// Worst possible disc differential
pub const SCORE_MIN: i32 = -64;
/// Best possible disc differential
pub const SCORE_MAX: i32 = 64;
/// Sentinel beyond any reachable score
pub const SCORE_INF: i32 = 127;
