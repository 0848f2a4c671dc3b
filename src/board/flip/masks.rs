//! Precomputed ray masks for the bit-scan flip variant.

use once_cell::sync::Lazy;

/// Per-square ray masks over the four axes, split by scan direction.
///
/// `asc[x][a]` holds the squares reachable from `x` along axis `a` toward
/// higher bit indices (E, N, NW, NE), `desc[x][a]` toward lower ones
/// (W, S, SE, SW); `x` itself is excluded and rays stop at the board edge,
/// so no mask ever wraps across a file boundary.
pub(crate) struct RayMasks {
    pub(crate) asc: [[u64; 4]; 64],
    pub(crate) desc: [[u64; 4]; 64],
}

// Axis steps as (rank, file) deltas for the ascending direction.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, -1), (1, 1)];

fn ray(rank: i32, file: i32, dr: i32, df: i32) -> u64 {
    let mut mask = 0;
    let mut r = rank + dr;
    let mut f = file + df;
    while (0..8).contains(&r) && (0..8).contains(&f) {
        mask |= 1u64 << (r * 8 + f);
        r += dr;
        f += df;
    }
    mask
}

pub(crate) static RAYS: Lazy<RayMasks> = Lazy::new(|| {
    let mut asc = [[0; 4]; 64];
    let mut desc = [[0; 4]; 64];

    for x in 0..64 {
        let rank = (x / 8) as i32;
        let file = (x % 8) as i32;
        for (a, &(dr, df)) in AXES.iter().enumerate() {
            asc[x][a] = ray(rank, file, dr, df);
            desc[x][a] = ray(rank, file, -dr, -df);
        }
    }

    RayMasks { asc, desc }
});
