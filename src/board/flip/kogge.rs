//! Portable parallel-prefix flip variant.
//!
//! For each of the eight ray directions, the candidate square's bit is
//! propagated through adjacent opponent discs (six steps cover the longest
//! possible run); the run is captured iff the square one step past it holds
//! a mover disc. No tables, no branches in the propagation itself.

use crate::board::types::Bitboard;

fn flip_asc(bit: u64, p: u64, o: u64, dir: u32) -> u64 {
    let mut f = (bit << dir) & o;
    f |= (f << dir) & o;
    f |= (f << dir) & o;
    f |= (f << dir) & o;
    f |= (f << dir) & o;
    f |= (f << dir) & o;
    if (f << dir) & p != 0 {
        f
    } else {
        0
    }
}

fn flip_desc(bit: u64, p: u64, o: u64, dir: u32) -> u64 {
    let mut f = (bit >> dir) & o;
    f |= (f >> dir) & o;
    f |= (f >> dir) & o;
    f |= (f >> dir) & o;
    f |= (f >> dir) & o;
    f |= (f >> dir) & o;
    if (f >> dir) & p != 0 {
        f
    } else {
        0
    }
}

/// Compute the flip mask for playing `x` with discs `p` against `o`
#[must_use]
pub fn flip(x: usize, p: u64, o: u64) -> u64 {
    debug_assert!(x < 64);
    let bit = 1u64 << x;
    let inner = o & Bitboard::NOT_EDGE_FILES;

    flip_asc(bit, p, inner, 1)
        | flip_asc(bit, p, o, 8)
        | flip_asc(bit, p, inner, 7)
        | flip_asc(bit, p, inner, 9)
        | flip_desc(bit, p, inner, 1)
        | flip_desc(bit, p, o, 8)
        | flip_desc(bit, p, inner, 7)
        | flip_desc(bit, p, inner, 9)
}
