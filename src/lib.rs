#![no_std]

// The standard library backs the harness and the tests;
// the transform engine itself only needs core.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;
pub mod radix;

#[cfg(feature = "std")]
pub mod harness;

pub use common::{FftError, FftProcess};
pub use radix::{Radix, SUPPORTED_LENGTHS};
