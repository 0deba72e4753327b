// src/float/spectrum.rs

use crate::common::FftError;
use num_complex::Complex32;
use super::math::sqrt;

/// Local maximum of a magnitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub bin: usize,
    pub magnitude: f32,
}

impl Peak {
    /// Centre frequency of the bin for a given sampling rate.
    pub fn frequency(&self, n: usize, sample_rate: f32) -> f32 {
        self.bin as f32 * sample_rate / n as f32
    }
}

/// Single-sided amplitude estimate of an unnormalized N-point spectrum.
///
/// Writes `N + 2` bins: `|X[i]| * 2 / N`. Bins N and N+1 read the padding past the
/// transform output and only exist to keep the buffer layout symmetric; they carry
/// no information.
pub fn magnitude_spectrum(spectrum: &[Complex32], n: usize, magnitude: &mut [f32]) -> Result<(), FftError> {
    if n == 0 {
        return Err(FftError::SizeMismatch);
    }

    let bins = n + 2;
    if spectrum.len() < bins || magnitude.len() < bins {
        return Err(FftError::BufferTooSmall);
    }

    let scale = 2.0 / n as f32;
    for (m, bin) in magnitude[..bins].iter_mut().zip(&spectrum[..bins]) {
        *m = sqrt(bin.norm_sqr()) * scale;
    }

    Ok(())
}

/// Local maxima of `magnitude` in bins `1..N/2` whose value reaches `threshold`.
pub fn peaks(magnitude: &[f32], n: usize, threshold: f32) -> impl Iterator<Item = Peak> + '_ {
    let end = (n / 2 + 1).min(magnitude.len());

    magnitude[..end]
        .windows(3)
        .enumerate()
        .filter(move |(_, w)| w[1] >= threshold && w[1] > w[0] && w[1] >= w[2])
        .map(|(i, w)| Peak { bin: i + 1, magnitude: w[1] })
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
