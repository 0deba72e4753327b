// src/float/validate.rs

use crate::common::FftError;
use num_complex::Complex32;
use super::math::sqrt;

/// Default relative tolerance for the round-trip check.
///
/// The bound scales with the peak modulus of the signal; for unit-scale signals it is
/// this absolute value.
pub const DEFAULT_TOLERANCE: f32 = 1e-6;

/// Which part of an N-sample buffer the round-trip check compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareRange {
    /// All N complex samples (2N scalars).
    #[default]
    Full,
    /// The first N scalars of the interleaved buffer, i.e. the first N/2 complex samples.
    Leading,
}

impl CompareRange {
    /// Complex samples covered for a transform of size `n`.
    pub fn samples(self, n: usize) -> usize {
        match self {
            CompareRange::Full => n,
            CompareRange::Leading => n / 2,
        }
    }
}

/// Checks that `reconstructed` matches `original` over `range`.
///
/// Each real and imaginary part may differ by at most
/// `relative_tolerance * max(1, peak)`, where `peak` is the largest modulus in the
/// compared part of `original`; for unit-scale signals the bound is `relative_tolerance`
/// itself. NaN in either buffer fails.
pub fn validate_round_trip(
    original: &[Complex32],
    reconstructed: &[Complex32],
    n: usize,
    relative_tolerance: f32,
    range: CompareRange,
) -> Result<(), FftError> {
    let count = range.samples(n);
    if original.len() < count || reconstructed.len() < count {
        return Err(FftError::BufferTooSmall);
    }

    let original = &original[..count];
    let reconstructed = &reconstructed[..count];

    let peak = original
        .iter()
        .map(|c| sqrt(c.norm_sqr()))
        .fold(0.0f32, f32::max);
    let threshold = relative_tolerance * peak.max(1.0);

    let mut passed = true;
    for (a, b) in original.iter().zip(reconstructed) {
        let within = (a.re - b.re).abs() <= threshold && (a.im - b.im).abs() <= threshold;
        if !within {
            passed = false;
        }
    }

    if passed {
        Ok(())
    } else {
        Err(FftError::ToleranceExceeded)
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
