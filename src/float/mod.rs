pub mod complex;
pub mod signal;
pub mod spectrum;
pub mod validate;
mod core;
mod math;

pub use crate::common::{ FftError, FftProcess };
pub use complex::CplxFft;
pub use self::core::{twiddle_len, BREV};
pub use signal::{generate, Tone, DEFAULT_TONES};
pub use spectrum::{magnitude_spectrum, peaks, Peak};
pub use validate::{validate_round_trip, CompareRange, DEFAULT_TOLERANCE};
