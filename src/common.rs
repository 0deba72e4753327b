// src/common.rs

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    /// The transform length is not one of the supported powers of two.
    UnsupportedLength(usize),
    /// The reconstructed signal drifted from the original beyond the tolerance.
    ToleranceExceeded,
    SizeMismatch,
    BufferTooSmall,
    InvalidSpan,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::UnsupportedLength(n) => write!(f, "Unsupported FFT length: {n} points"),
            FftError::ToleranceExceeded => write!(f, "Round-trip error exceeds tolerance"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::BufferTooSmall => write!(f, "Auxiliary buffers are too small"),
            FftError::InvalidSpan => write!(f, "Sample span lies outside the buffers"),
        }
    }
}

pub trait FftProcess<T> {
    fn process(&self, input: &[T], output: &mut [T], inverse: bool) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
