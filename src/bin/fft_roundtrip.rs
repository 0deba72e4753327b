//! Runs the FFT/IFFT round-trip check once and prints the verdict.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rs_mixed_fft::float::{CompareRange, DEFAULT_TOLERANCE};
use rs_mixed_fft::harness::{self, HarnessConfig, Outcome, BANNER, DEFAULT_SAMPLE_RATE, DEFAULT_SIZE};
use rs_mixed_fft::FftError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Compare {
    /// Every reconstructed sample
    Full,
    /// Only the first N scalars of the interleaved buffer
    Leading,
}

impl From<Compare> for CompareRange {
    fn from(compare: Compare) -> Self {
        match compare {
            Compare::Full => CompareRange::Full,
            Compare::Leading => CompareRange::Leading,
        }
    }
}

/// Forward FFT followed by inverse FFT of a two-tone test signal.
#[derive(Parser, Debug)]
#[command(name = "fft-roundtrip", version, about)]
struct Args {
    /// Transform length (power of two, 8..=65536)
    #[arg(short = 'n', long, env = "FFT_SIZE", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Sampling frequency in Hz
    #[arg(long, env = "FFT_SAMPLE_RATE", default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: f32,

    /// Round-trip tolerance, relative to the signal peak
    #[arg(long, env = "FFT_TOLERANCE", default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f32,

    /// Which samples the round-trip check compares
    #[arg(long, value_enum, env = "FFT_COMPARE", default_value_t = Compare::Full)]
    compare: Compare,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let config = HarnessConfig {
        size: args.size,
        sample_rate: args.sample_rate,
        relative_tolerance: args.tolerance,
        compare: args.compare.into(),
        ..HarnessConfig::default()
    };

    match harness::run(&config) {
        Ok(report) => {
            println!("{BANNER}");
            println!("{}", report.outcome);
            match report.outcome {
                Outcome::Success => ExitCode::SUCCESS,
                Outcome::Failure => ExitCode::FAILURE,
            }
        }
        Err(FftError::UnsupportedLength(n)) => {
            println!("Cannot compute a {n}-point FFT: unsupported length");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
