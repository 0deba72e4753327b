// src/float/signal.rs

use core::f64::consts::PI;
use num_complex::Complex32;
use super::math::sin;

/// One sinusoidal component of a test signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub amplitude: f32,
    /// Hz
    pub frequency: f32,
}

impl Tone {
    pub const fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }
}

/// 5 at 150 Hz plus 15 at 350 Hz.
pub const DEFAULT_TONES: [Tone; 2] = [Tone::new(5.0, 150.0), Tone::new(15.0, 350.0)];

/// Fills `output` with the sum of `tones` sampled at `sample_rate`.
///
/// Sample i is evaluated at t = i / Fs in double precision; imaginary parts are zero.
pub fn generate(tones: &[Tone], sample_rate: f32, output: &mut [Complex32]) {
    let fs = f64::from(sample_rate);

    for (i, sample) in output.iter_mut().enumerate() {
        let t = i as f64 / fs;
        let value: f64 = tones
            .iter()
            .map(|tone| f64::from(tone.amplitude) * sin(2.0 * PI * f64::from(tone.frequency) * t))
            .sum();
        *sample = Complex32::new(value as f32, 0.0);
    }
}
