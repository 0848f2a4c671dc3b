//! Zobrist-style hashing for positions.
//!
//! One random key per (byte position, byte value) over the 16 bytes of the
//! two bitboards; a position hash is the XOR fold of its 16 lookups.

use rand::prelude::*;

pub(crate) struct ZobristKeys {
    // byte_keys[byte position 0-15][byte value]
    pub(crate) byte_keys: [[u64; 256]; 16],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(5_4852_3761_u64); // Fixed seed for reproducibility
        let mut byte_keys = [[0; 256]; 16];

        for position in &mut byte_keys {
            for key in position.iter_mut() {
                *key = rng.gen();
            }
        }

        ZobristKeys { byte_keys }
    }
}

pub(crate) static ZOBRIST: std::sync::LazyLock<ZobristKeys> =
    std::sync::LazyLock::new(ZobristKeys::new);
