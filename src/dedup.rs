//! Symmetry-folding store of (position, move) pairs.
//!
//! Learning and verification tools replay large batches of games and must
//! not record the same situation eight times under different orientations.
//! Positions are reduced to their canonical form — the minimal image over
//! the 8 board symmetries — with the move mapped through the same symmetry,
//! and hashed into a fixed set of buckets. Buckets are individually locked
//! so several workers can feed one store.

use parking_lot::Mutex;

use crate::board::{Board, Square};

/// A hash-bucketed set of canonical (position, originating move) pairs
pub struct DedupStore {
    buckets: Box<[Mutex<Vec<(Board, Square)>>]>,
    mask: u64,
}

impl DedupStore {
    /// Create a store with `2^bits` buckets
    #[must_use]
    pub fn with_bits(bits: u32) -> Self {
        let size = 1usize << bits;
        let buckets = (0..size)
            .map(|_| Mutex::new(Vec::new()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        DedupStore {
            buckets,
            mask: (size - 1) as u64,
        }
    }

    /// Record `x` played from `board`.
    ///
    /// Returns true if the canonical pair was new, false if this situation
    /// (or any symmetric image of it) was already present.
    pub fn insert(&self, board: &Board, x: Square) -> bool {
        let (unique, s) = board.unique();
        let y = x.symmetry(s);

        let bucket = &self.buckets[(unique.hash() & self.mask) as usize];
        let mut entries = bucket.lock();
        if entries.iter().any(|&(b, m)| b == unique && m == y) {
            #[cfg(feature = "logging")]
            log::trace!("dedup: {y} from known position skipped");
            return false;
        }
        entries.push((unique, y));
        true
    }

    /// Total number of recorded pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.lock().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
