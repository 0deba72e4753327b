// src/harness.rs

//! Round-trip test pipeline: generate, transform, measure, invert, compare.

use core::fmt;
use std::vec;
use std::vec::Vec;

use num_complex::Complex32;
use tracing::{debug, info, warn};

use crate::common::FftError;
use crate::float::{
    generate, magnitude_spectrum, peaks, twiddle_len, validate_round_trip, CompareRange, CplxFft, Peak, Tone,
    DEFAULT_TOLERANCE, DEFAULT_TONES,
};
use crate::radix::Radix;

pub const DEFAULT_SIZE: usize = 1024;
pub const DEFAULT_SAMPLE_RATE: f32 = 1000.0;

/// Extra complex slots past N in every sample buffer, read by the magnitude calculator.
pub const PADDING: usize = 2;

/// Peaks are reported down to this fraction of the strongest bin.
const PEAK_FRACTION: f32 = 0.2;

pub const BANNER: &str = "Complex FFT round-trip test:";

#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub size: usize,
    pub sample_rate: f32,
    /// Round-trip tolerance relative to the peak modulus of the test signal.
    pub relative_tolerance: f32,
    pub tones: Vec<Tone>,
    pub compare: CompareRange,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            sample_rate: DEFAULT_SAMPLE_RATE,
            relative_tolerance: DEFAULT_TOLERANCE,
            tones: DEFAULT_TONES.to_vec(),
            compare: CompareRange::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success!"),
            Outcome::Failure => write!(f, "Failure!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub radix: Radix,
    pub peaks: Vec<Peak>,
    pub outcome: Outcome,
}

/// Every buffer the pipeline touches, allocated once for one transform size.
pub struct Context {
    size: usize,
    input: Vec<Complex32>,
    spectrum: Vec<Complex32>,
    reconstructed: Vec<Complex32>,
    twiddles: Vec<Complex32>,
    magnitude: Vec<f32>,
}

impl Context {
    /// Allocates the buffers for `size`, which must be a supported transform length.
    pub fn new(size: usize) -> Result<Self, FftError> {
        select_radix(size)?;

        Ok(Self {
            size,
            input: vec![Complex32::default(); size + PADDING],
            spectrum: vec![Complex32::default(); size + PADDING],
            reconstructed: vec![Complex32::default(); size + PADDING],
            twiddles: vec![Complex32::default(); twiddle_len(size)],
            magnitude: vec![0.0; size + PADDING],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn input(&self) -> &[Complex32] {
        &self.input
    }

    pub fn spectrum(&self) -> &[Complex32] {
        &self.spectrum
    }

    pub fn reconstructed(&self) -> &[Complex32] {
        &self.reconstructed
    }

    pub fn twiddles(&self) -> &[Complex32] {
        &self.twiddles
    }

    pub fn magnitude(&self) -> &[f32] {
        &self.magnitude
    }

    fn reset(&mut self) {
        self.input.fill(Complex32::default());
        self.spectrum.fill(Complex32::default());
        self.reconstructed.fill(Complex32::default());
        self.twiddles.fill(Complex32::default());
        self.magnitude.fill(0.0);
    }

    /// Runs the whole pipeline once.
    ///
    /// An unsupported `config.size` returns `UnsupportedLength` before any buffer is written.
    /// A round-trip mismatch is not an error: it is reported as `Outcome::Failure`.
    pub fn run(&mut self, config: &HarnessConfig) -> Result<Report, FftError> {
        let radix = select_radix(config.size)?;
        if config.size != self.size {
            return Err(FftError::SizeMismatch);
        }
        let n = self.size;

        self.reset();
        generate(&config.tones, config.sample_rate, &mut self.input[..n]);

        let fft = CplxFft::new(&mut self.twiddles, n)?;
        fft.process(&self.input[..n], &mut self.spectrum[..n], false)?;

        magnitude_spectrum(&self.spectrum, n, &mut self.magnitude)?;
        let strongest = self.magnitude[..=n / 2].iter().copied().fold(0.0f32, f32::max);
        let found: Vec<Peak> = peaks(&self.magnitude, n, strongest * PEAK_FRACTION).collect();
        for peak in &found {
            debug!(
                bin = peak.bin,
                frequency = peak.frequency(n, config.sample_rate),
                magnitude = peak.magnitude,
                "spectral peak"
            );
        }

        fft.process(&self.spectrum[..n], &mut self.reconstructed[..n], true)?;

        let outcome = match validate_round_trip(
            &self.input,
            &self.reconstructed,
            n,
            config.relative_tolerance,
            config.compare,
        ) {
            Ok(()) => Outcome::Success,
            Err(FftError::ToleranceExceeded) => Outcome::Failure,
            Err(err) => return Err(err),
        };
        info!(n, radix = radix.fan_in(), %outcome, "round trip checked");

        Ok(Report { radix, peaks: found, outcome })
    }
}

fn select_radix(n: usize) -> Result<Radix, FftError> {
    Radix::for_length(n).inspect_err(|_| {
        warn!(n, "no radix for this FFT length, skipping the transform");
    })
}

/// Builds a fresh context for `config`, runs it and drops it.
///
/// The length is checked before anything is allocated.
pub fn run(config: &HarnessConfig) -> Result<Report, FftError> {
    Context::new(config.size)?.run(config)
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
