//! Tuned ordering tables and weights.
//!
//! The threshold tables and default weights are tuned values carried over
//! verbatim from long solver runs; they are deliberately not re-derived.

// ============================================================================
// SENTINEL PRIORITIES
// ============================================================================
// Above every weighted score. Ordered: wipeout > first hash > second hash.

/// A move that captures every opponent disc - searched first, always
pub const WIPEOUT_SCORE: i32 = 1 << 30;

/// First transposition-hint move
pub const HASH_FIRST_SCORE: i32 = 1 << 29;

/// Second transposition-hint move
pub const HASH_SECOND_SCORE: i32 = 1 << 28;

// ============================================================================
// STATIC TABLES
// ============================================================================

/// Positional value of each square: corners highest, corner-adjacent
/// squares lowest, edges in between.
pub(crate) const SQUARE_VALUE: [i32; 64] = [
    18,  4, 16, 12, 12, 16,  4, 18,
     4,  2,  6,  8,  8,  6,  2,  4,
    16,  6, 14, 10, 10, 14,  6, 16,
    12,  8, 10,  0,  0, 10,  8, 12,
    12,  8, 10,  0,  0, 10,  8, 12,
    16,  6, 14, 10, 10, 14,  6, 16,
     4,  2,  6,  8,  8,  6,  2,  4,
    18,  4, 16, 12, 12, 16,  4, 18,
];

/// One bit per board quadrant; XOR-folding the empties of a position
/// through this table yields its 4-bit parity signature.
pub(crate) const QUADRANT_ID: [u8; 64] = [
    1, 1, 1, 1, 2, 2, 2, 2,
    1, 1, 1, 1, 2, 2, 2, 2,
    1, 1, 1, 1, 2, 2, 2, 2,
    1, 1, 1, 1, 2, 2, 2, 2,
    4, 4, 4, 4, 8, 8, 8, 8,
    4, 4, 4, 4, 8, 8, 8, 8,
    4, 4, 4, 4, 8, 8, 8, 8,
    4, 4, 4, 4, 8, 8, 8, 8,
];

/// Minimum search depth, per empty count, at which the lookahead ranking
/// layer pays for itself. Below it only the fast static layers run.
pub(crate) const MIN_DEPTH: [i32; 64] = [
    19, 18, 18, 18, 17, 17, 17, 16, // (never reached for empties < 14)
    16, 16, 15, 15, 15, 14, 14, 14,
    13, 13, 13, 12, 12, 12, 11, 11,
    11, 10, 10, 10,  9,  9,  9,  9,
     9,  9,  9,  9,  9,  9,  9,  9,
     9,  9,  9,  9,  9,  9,  9,  9,
     9,  9,  9,  9,  9,  9,  9,  9,
     9,  9,  9,  9,  9,  9,  9,  9,
];

/// Widening applied to alpha before it becomes the shallow-search window
pub(crate) const SORT_ALPHA_DELTA: i32 = 8;

// ============================================================================
// WEIGHTS
// ============================================================================

/// Importance weights of the ranking terms.
///
/// Passed explicitly into the ranker so tuning harnesses can vary a copy
/// without touching shared state. The defaults keep mobility and stability
/// dominant over coarse square value, which dominates parity.
#[derive(Clone, Copy, Debug)]
pub struct OrderingWeights {
    /// Bonus when the child position already sits in the hash table
    pub hash: i32,
    /// Shallow evaluation result
    pub eval: i32,
    /// Opponent mobility after the move
    pub mobility: i32,
    /// Own corner stability after the move
    pub corner_stability: i32,
    /// Opponent potential mobility after the move
    pub potential_mobility: i32,
    /// Parity bonus when few empties remain
    pub low_parity: i32,
    /// Parity bonus in the pre-endgame
    pub mid_parity: i32,
    /// Parity bonus in the midgame
    pub high_parity: i32,
}

impl Default for OrderingWeights {
    fn default() -> Self {
        OrderingWeights {
            hash: 1 << 15,
            eval: 1 << 15,
            mobility: 1 << 15,
            corner_stability: 1 << 11,
            potential_mobility: 1 << 5,
            low_parity: 1 << 3,
            mid_parity: 1 << 2,
            high_parity: 1 << 1,
        }
    }
}

impl OrderingWeights {
    /// Parity weight for a given number of empties: strongest near the end
    /// of the game, zero in the opening.
    pub(crate) fn parity_weight(&self, empties: i32) -> i32 {
        if empties < 21 {
            if empties < 12 {
                self.low_parity
            } else {
                self.mid_parity
            }
        } else if empties < 30 {
            self.high_parity
        } else {
            0
        }
    }
}
