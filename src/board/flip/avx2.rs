//! AVX2 flip variant: all four axes in one 256-bit register.
//!
//! Same parallel-prefix algorithm as the portable variant, but the four
//! axis lanes run simultaneously using per-lane variable shifts; the lane
//! results are OR-folded down to the final mask at the end.

use std::arch::x86_64::*;

use crate::board::types::Bitboard;

const INNER: i64 = Bitboard::NOT_EDGE_FILES as i64;

/// Compute the flip mask for playing `x` with discs `p` against `o`.
///
/// # Safety
/// The caller must ensure the CPU supports AVX2.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn flip(x: usize, p: u64, o: u64) -> u64 {
    debug_assert!(x < 64);
    // Lane order: [E/W, N/S, NW/SE, NE/SW]; horizontal and diagonal lanes
    // mask out files a and h to stop wraparound.
    let shifts = _mm256_set_epi64x(9, 7, 8, 1);
    let lane_mask = _mm256_set_epi64x(INNER, INNER, -1, INNER);

    let pp = _mm256_set1_epi64x(p as i64);
    let mo = _mm256_and_si256(_mm256_set1_epi64x(o as i64), lane_mask);
    let bit = _mm256_set1_epi64x((1u64 << x) as i64);
    let zero = _mm256_setzero_si256();

    // Ascending directions
    let mut fl = _mm256_and_si256(_mm256_sllv_epi64(bit, shifts), mo);
    for _ in 0..5 {
        fl = _mm256_or_si256(fl, _mm256_and_si256(_mm256_sllv_epi64(fl, shifts), mo));
    }
    let captured = _mm256_and_si256(_mm256_sllv_epi64(fl, shifts), pp);
    let fl = _mm256_andnot_si256(_mm256_cmpeq_epi64(captured, zero), fl);

    // Descending directions
    let mut fr = _mm256_and_si256(_mm256_srlv_epi64(bit, shifts), mo);
    for _ in 0..5 {
        fr = _mm256_or_si256(fr, _mm256_and_si256(_mm256_srlv_epi64(fr, shifts), mo));
    }
    let captured = _mm256_and_si256(_mm256_srlv_epi64(fr, shifts), pp);
    let fr = _mm256_andnot_si256(_mm256_cmpeq_epi64(captured, zero), fr);

    // Fold the four lanes into one mask
    let all = _mm256_or_si256(fl, fr);
    let lo = _mm_or_si128(
        _mm256_castsi256_si128(all),
        _mm256_extracti128_si256(all, 1),
    );
    let folded = _mm_or_si128(lo, _mm_unpackhi_epi64(lo, lo));
    _mm_cvtsi128_si64(folded) as u64
}
