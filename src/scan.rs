//! Vectorized single-byte presence scan with a scalar fallback.
//!
//! [`contains_byte`] answers "does this byte occur anywhere in the buffer"
//! and nothing more; the match position is intentionally discarded. The bulk
//! of the buffer is examined 16 bytes at a time with whichever 128-bit
//! vector family the target provides (SSE2 on x86/x86_64, NEON on aarch64):
//! broadcast the needle into every lane, compare a block in one instruction,
//! and test the combined mask. Targets with neither family fall back to
//! [`contains_byte_unrolled`]. Any bytes left over after the bulk loop are
//! checked one at a time.
//!
//! The selection is a compile-time capability switch; all three
//! implementations honor the same contract and are tested against each
//! other and against a naive reference loop.

/// True iff `needle` occurs anywhere in `haystack`.
///
/// Empty input returns `false` without touching memory. Pure presence test;
/// safe to call concurrently from any number of threads.
#[inline]
pub fn contains_byte(haystack: &[u8], needle: u8) -> bool {
    if haystack.is_empty() {
        return false;
    }
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
    return sse2_contains(haystack, needle);
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    return neon_contains(haystack, needle);
    #[cfg(not(any(
        all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"),
        all(target_arch = "aarch64", target_feature = "neon")
    )))]
    contains_byte_unrolled(haystack, needle)
}

/// Scalar implementation of the [`contains_byte`] contract.
///
/// Eight straight-line comparisons per iteration, short-circuiting on the
/// first hit. Used as the dispatch target on scalar-only builds and as the
/// differential-testing reference everywhere else.
pub fn contains_byte_unrolled(haystack: &[u8], needle: u8) -> bool {
    let chunks = haystack.chunks_exact(8);
    let remainder = chunks.remainder();
    for c in chunks {
        if c[0] == needle
            || c[1] == needle
            || c[2] == needle
            || c[3] == needle
            || c[4] == needle
            || c[5] == needle
            || c[6] == needle
            || c[7] == needle
        {
            return true;
        }
    }
    tail_contains(remainder, needle)
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
fn sse2_contains(haystack: &[u8], needle: u8) -> bool {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::{
        __m128i, _mm_cmpeq_epi8, _mm_loadu_si128, _mm_movemask_epi8, _mm_set1_epi8,
    };
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::{
        __m128i, _mm_cmpeq_epi8, _mm_loadu_si128, _mm_movemask_epi8, _mm_set1_epi8,
    };

    let chunks = haystack.chunks_exact(16);
    let remainder = chunks.remainder();
    // SAFETY: SSE2 is statically enabled for this target. Each chunk is
    // exactly 16 readable bytes and the unaligned load has no alignment
    // requirement.
    unsafe {
        let find = _mm_set1_epi8(needle as i8);
        for chunk in chunks {
            let eq = _mm_cmpeq_epi8(_mm_loadu_si128(chunk.as_ptr() as *const __m128i), find);
            if _mm_movemask_epi8(eq) != 0 {
                return true;
            }
        }
    }
    tail_contains(remainder, needle)
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
fn neon_contains(haystack: &[u8], needle: u8) -> bool {
    use core::arch::aarch64::{vceqq_u8, vdupq_n_u8, vgetq_lane_u64, vld1q_u8, vreinterpretq_u64_u8};

    let chunks = haystack.chunks_exact(16);
    let remainder = chunks.remainder();
    // SAFETY: NEON is statically enabled for this target and each chunk is
    // exactly 16 readable bytes.
    unsafe {
        let find = vdupq_n_u8(needle);
        for chunk in chunks {
            let eq = vceqq_u8(vld1q_u8(chunk.as_ptr()), find);
            let halves = vreinterpretq_u64_u8(eq);
            if vgetq_lane_u64::<0>(halves) != 0 || vgetq_lane_u64::<1>(halves) != 0 {
                return true;
            }
        }
    }
    tail_contains(remainder, needle)
}

/// One-at-a-time scan of the bytes left over after the bulk loop.
#[inline]
fn tail_contains(tail: &[u8], needle: u8) -> bool {
    tail.iter().any(|&b| b == needle)
}
