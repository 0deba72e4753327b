use core::ops::Range;

use crate::common::{FftError, FftProcess};
use crate::radix::Radix;
use num_complex::Complex32; // Complex<f32>
use tracing::debug;
use super::core::{mixed_radix_core, precompute_twiddles, twiddle_len};

/// Structure that holds the precomputed twiddle table for one transform length.
/// The same table serves the forward and the inverse direction.
pub struct CplxFft<'a> {
    twiddles: &'a mut [Complex32],
    n: usize,
    radix: Radix,
}

impl<'a> CplxFft<'a> {
    /// Selects the radix for `n` and fills `twiddles`.
    ///
    /// `twiddles` must hold at least `twiddle_len(n)` entries. Nothing is written when
    /// `n` is not a supported length.
    pub fn new(twiddles: &'a mut [Complex32], n: usize) -> Result<Self, FftError> {
        let radix = Radix::for_length(n)?;
        if twiddles.len() < twiddle_len(n) {
            return Err(FftError::BufferTooSmall);
        }

        let mut fft = Self { twiddles, n, radix };
        fft.precompute();
        debug!(n, radix = radix.fan_in(), twiddles = twiddle_len(n), "mixed-radix FFT planned");
        Ok(fft)
    }

    fn precompute(&mut self) {
        precompute_twiddles(self.twiddles, self.n);
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn twiddles(&self) -> &[Complex32] {
        &self.twiddles[..twiddle_len(self.n)]
    }

    /// Transforms `input` into `output`; both must hold exactly N samples.
    ///
    /// The forward result is unnormalized (gain N). The inverse divides by N, so
    /// forward followed by inverse reproduces the input.
    pub fn process(&self, input: &[Complex32], output: &mut [Complex32], inverse: bool) -> Result<(), FftError> {
        if input.len() != self.n || output.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        self.process_span(input, output, 0..self.n, inverse)
    }

    /// Transforms the samples `input[span]` into `output[span]`.
    ///
    /// The span must be exactly N samples long. Samples outside it are left untouched.
    pub fn process_span(
        &self,
        input: &[Complex32],
        output: &mut [Complex32],
        span: Range<usize>,
        inverse: bool,
    ) -> Result<(), FftError> {
        if span.len() != self.n {
            return Err(FftError::SizeMismatch);
        }
        if span.end > input.len() || span.end > output.len() {
            return Err(FftError::InvalidSpan);
        }

        let buffer = &mut output[span.clone()];
        buffer.copy_from_slice(&input[span]);

        if inverse {
            mixed_radix_core::<true>(buffer, self.twiddles, self.radix);
        } else {
            mixed_radix_core::<false>(buffer, self.twiddles, self.radix);
        }

        Ok(())
    }
}

impl<'a> FftProcess<Complex32> for CplxFft<'a> {
    fn process(&self, input: &[Complex32], output: &mut [Complex32], inverse: bool) -> Result<(), FftError> {
        self.process(input, output, inverse)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
