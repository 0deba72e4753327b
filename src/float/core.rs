// src/float/core.rs

use num_complex::Complex32;
use core::f64::consts::PI;

use super::math::sin_cos;
use crate::radix::Radix;

/// 6-bit bit-reversal lookup shared by every transform length.
pub const BREV: [u8; 64] = [
    0x00, 0x20, 0x10, 0x30, 0x08, 0x28, 0x18, 0x38,
    0x04, 0x24, 0x14, 0x34, 0x0c, 0x2c, 0x1c, 0x3c,
    0x02, 0x22, 0x12, 0x32, 0x0a, 0x2a, 0x1a, 0x3a,
    0x06, 0x26, 0x16, 0x36, 0x0e, 0x2e, 0x1e, 0x3e,
    0x01, 0x21, 0x11, 0x31, 0x09, 0x29, 0x19, 0x39,
    0x05, 0x25, 0x15, 0x35, 0x0d, 0x2d, 0x1d, 0x3d,
    0x03, 0x23, 0x13, 0x33, 0x0b, 0x2b, 0x1b, 0x3b,
    0x07, 0x27, 0x17, 0x37, 0x0f, 0x2f, 0x1f, 0x3f,
];

const BREV_BITS: u32 = 6;
/// Widest index `bit_reverse` can handle (three table lookups).
const MAX_REVERSE_BITS: u32 = 3 * BREV_BITS;

/// Number of twiddle factors `precompute_twiddles` writes for an FFT of size N.
pub const fn twiddle_len(n: usize) -> usize {
    let quarter = n >> 2;
    let mut len = 0;
    let mut j = 1;
    while j <= quarter {
        len += 3 * (quarter / j);
        j <<= 2;
    }
    len
}

/// Computes the rotation factors (Twiddle Factors) for an FFT of size N.
///
/// One block per radix-4 stage: for strides j = 1, 4, 16, ... and i = 0, j, 2j, ... < N/4,
/// the block holds (cos, sin) of 2πi/N, 4πi/N and 6πi/N, in that order.
/// The stage kernels walk these blocks sequentially, so the ordering is load-bearing.
pub(crate) fn precompute_twiddles(twiddles: &mut [Complex32], n: usize) {
    let quarter = n >> 2;
    let mut k = 0;
    let mut j = 1;

    while j <= quarter {
        for i in (0..quarter).step_by(j) {
            for multiple in 1..=3 {
                let angle = 2.0 * PI * ((multiple * i) as f64) / (n as f64);
                let (sin, cos) = sin_cos(angle);
                twiddles[k] = Complex32::new(cos as f32, sin as f32);
                k += 1;
            }
        }
        j <<= 2;
    }
}

/// Reverses the low `bits` bits of `index` (bits <= 18) using three `BREV` lookups.
#[inline]
pub(crate) fn bit_reverse(index: usize, bits: u32) -> usize {
    let lo = BREV[index & 0x3f] as usize;
    let mid = BREV[(index >> BREV_BITS) & 0x3f] as usize;
    let hi = BREV[(index >> (2 * BREV_BITS)) & 0x3f] as usize;

    let reversed = (lo << (2 * BREV_BITS)) | (mid << BREV_BITS) | hi;
    reversed >> (MAX_REVERSE_BITS - bits)
}

/// Puts a bit-reversed buffer back into natural order.
pub(crate) fn bit_reverse_permute(buffer: &mut [Complex32]) {
    let n = buffer.len();
    let bits = n.trailing_zeros();

    for i in 1..(n - 1) {
        let j = bit_reverse(i, bits);
        if i < j {
            buffer.swap(i, j);
        }
    }
}

/// Multiplication by -j (forward) or +j (inverse).
#[inline(always)]
fn rotate<const INVERSE: bool>(z: Complex32) -> Complex32 {
    if INVERSE {
        Complex32::new(-z.im, z.re)
    } else {
        Complex32::new(z.im, -z.re)
    }
}

/// The table stores e^{+jθ}; the forward transform rotates by its conjugate.
#[inline(always)]
fn twiddle<const INVERSE: bool>(w: Complex32) -> Complex32 {
    if INVERSE { w } else { w.conj() }
}

/// 4-point DFT of (a, b, c, d), outputs in natural order X0..X3.
#[inline(always)]
fn butterfly4<const INVERSE: bool>(
    a: Complex32,
    b: Complex32,
    c: Complex32,
    d: Complex32,
) -> [Complex32; 4] {
    let h = a + c;
    let l = a - c;
    let h2 = b + d;
    let l2 = rotate::<INVERSE>(b - d);

    [h + h2, l + l2, h - h2, l - l2]
}

/// Mixed radix-2/4 FFT core.
///
/// Radix-4 stages run from the largest stride down, each one reading its own block of
/// the twiddle table. The last stage combines every group of four samples either as a
/// radix-4 butterfly or as two radix-2 butterflies, leaving the bins in bit-reversed
/// order; a final permutation restores natural order.
///
/// The forward direction is unnormalized. The inverse scales by 1/4 per radix-4 stage
/// and by 1/2 for a radix-2 last stage, for 1/N overall.
pub(crate) fn mixed_radix_core<const INVERSE: bool>(
    buffer: &mut [Complex32],
    twiddles: &[Complex32],
    radix: Radix,
) {
    let n = buffer.len();

    // 1. Radix-4 stages
    let mut stride = n;
    let mut tw_offset = 0;

    while stride > radix.fan_in() {
        let quarter = stride >> 2;
        let stage = &twiddles[tw_offset..tw_offset + 3 * quarter];

        for block in buffer.chunks_exact_mut(stride) {
            for (i, w) in stage.chunks_exact(3).enumerate() {
                let [mut x0, mut x1, mut x2, mut x3] = butterfly4::<INVERSE>(
                    block[i],
                    block[i + quarter],
                    block[i + 2 * quarter],
                    block[i + 3 * quarter],
                );

                if INVERSE {
                    x0 = x0.scale(0.25);
                    x1 = x1.scale(0.25);
                    x2 = x2.scale(0.25);
                    x3 = x3.scale(0.25);
                }

                // X2 goes to the second quarter, X1 to the third: bit-reversed slots
                block[i] = x0;
                block[i + quarter] = x2 * twiddle::<INVERSE>(w[1]);
                block[i + 2 * quarter] = x1 * twiddle::<INVERSE>(w[0]);
                block[i + 3 * quarter] = x3 * twiddle::<INVERSE>(w[2]);
            }
        }

        tw_offset += 3 * quarter;
        stride = quarter;
    }

    // 2. Last stage, no twiddles
    let scale = match radix {
        Radix::Four => 0.25,
        Radix::Two => 0.5,
    };

    for group in buffer.chunks_exact_mut(4) {
        let (c0, c1, c2, c3) = (group[0], group[1], group[2], group[3]);

        let out = match radix {
            Radix::Four => {
                let [x0, x1, x2, x3] = butterfly4::<INVERSE>(c0, c1, c2, c3);
                [x0, x2, x1, x3]
            }
            Radix::Two => [c0 + c1, c0 - c1, c2 + c3, c2 - c3],
        };

        for (slot, value) in group.iter_mut().zip(out) {
            *slot = if INVERSE { value.scale(scale) } else { value };
        }
    }

    // 3. Natural order
    bit_reverse_permute(buffer);
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
