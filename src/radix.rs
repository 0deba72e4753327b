// src/radix.rs

use crate::common::FftError;

/// Every transform length the engine accepts, smallest first.
pub const SUPPORTED_LENGTHS: [usize; 14] = [
    8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536,
];

/// Butterfly fan-in of the last stage.
///
/// Every length is split by radix-4 stages first; the radix only decides whether the
/// final group of four samples is combined as one radix-4 butterfly or as two radix-2
/// butterflies.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Radix {
    Two = 2,
    Four = 4,
}

impl Radix {
    pub fn for_length(n: usize) -> Result<Self, FftError> {
        match n {
            16 | 64 | 256 | 1024 | 4096 | 16384 | 65536 => Ok(Radix::Four),
            8 | 32 | 128 | 512 | 2048 | 8192 | 32768 => Ok(Radix::Two),
            _ => Err(FftError::UnsupportedLength(n)),
        }
    }

    #[inline]
    pub const fn fan_in(self) -> usize {
        self as usize
    }
}
