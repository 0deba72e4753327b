use super::*;
use crate::radix::SUPPORTED_LENGTHS;
use std::string::ToString;
use std::vec;
use std::vec::Vec;

fn local_max(magnitude: &[f32], bin: usize) -> bool {
    magnitude[bin] > magnitude[bin - 1] && magnitude[bin] >= magnitude[bin + 1]
}

#[test]
fn test_default_pipeline_passes() {
    let report = run(&HarnessConfig::default()).unwrap();

    assert_eq!(report.radix, Radix::Four);
    assert_eq!(report.outcome, Outcome::Success);
}

#[test]
fn test_magnitude_peaks_of_two_tone_signal() {
    let config = HarnessConfig::default();
    let mut context = Context::new(config.size).unwrap();
    let report = context.run(&config).unwrap();
    let magnitude = context.magnitude();

    // 150 Hz and 350 Hz fall between bins at N = 1024, Fs = 1000: energy leaks into neighbours
    assert!(local_max(magnitude, 154));
    assert!(local_max(magnitude, 358));
    assert!(magnitude[154] > 3.0 && magnitude[154] < 5.5, "bin 154: {}", magnitude[154]);
    assert!(magnitude[358] > 10.0 && magnitude[358] < 15.5, "bin 358: {}", magnitude[358]);

    for (bin, m) in magnitude[..=512].iter().enumerate() {
        if bin.abs_diff(154) > 8 && bin.abs_diff(358) > 8 {
            assert!(*m < 1.0, "bin {}: {}", bin, m);
        }
    }

    let bins: Vec<usize> = report.peaks.iter().map(|p| p.bin).collect();
    assert_eq!(bins, vec![154, 358]);
}

#[test]
fn test_unsupported_length_leaves_buffers_untouched() {
    let config = HarnessConfig::default();
    let mut context = Context::new(config.size).unwrap();
    context.run(&config).unwrap();

    let input = context.input().to_vec();
    let spectrum = context.spectrum().to_vec();
    let reconstructed = context.reconstructed().to_vec();
    let twiddles = context.twiddles().to_vec();
    let magnitude = context.magnitude().to_vec();

    let unsupported = HarnessConfig { size: 100, ..HarnessConfig::default() };
    assert_eq!(context.run(&unsupported), Err(FftError::UnsupportedLength(100)));

    assert_eq!(context.input(), &input[..]);
    assert_eq!(context.spectrum(), &spectrum[..]);
    assert_eq!(context.reconstructed(), &reconstructed[..]);
    assert_eq!(context.twiddles(), &twiddles[..]);
    assert_eq!(context.magnitude(), &magnitude[..]);
}

#[test]
fn test_unsupported_length_allocates_nothing() {
    assert!(matches!(Context::new(100), Err(FftError::UnsupportedLength(100))));

    // Rejected before allocation: these buffers could never fit in memory
    let huge = usize::MAX / 2 + 1;
    assert!(matches!(Context::new(huge), Err(FftError::UnsupportedLength(n)) if n == huge));

    let config = HarnessConfig { size: huge, ..HarnessConfig::default() };
    assert_eq!(run(&config), Err(FftError::UnsupportedLength(huge)));
}

#[test]
fn test_config_size_must_match_context() {
    let mut context = Context::new(512).unwrap();
    assert_eq!(context.run(&HarnessConfig::default()), Err(FftError::SizeMismatch));
}

#[test]
fn test_rerun_is_identical() {
    let config = HarnessConfig::default();
    let mut context = Context::new(config.size).unwrap();

    let first = context.run(&config).unwrap();
    let input = context.input().to_vec();
    let spectrum = context.spectrum().to_vec();
    let reconstructed = context.reconstructed().to_vec();
    let magnitude = context.magnitude().to_vec();

    let second = context.run(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(context.input(), &input[..]);
    assert_eq!(context.spectrum(), &spectrum[..]);
    assert_eq!(context.reconstructed(), &reconstructed[..]);
    assert_eq!(context.magnitude(), &magnitude[..]);
}

#[test]
fn test_every_supported_length_round_trips() {
    for n in SUPPORTED_LENGTHS {
        for compare in [CompareRange::Full, CompareRange::Leading] {
            let config = HarnessConfig { size: n, compare, ..HarnessConfig::default() };
            let report = run(&config).unwrap();
            assert_eq!(report.outcome, Outcome::Success, "N = {}, {:?}", n, compare);
        }
    }
}

#[test]
fn test_padding_is_never_written() {
    let config = HarnessConfig::default();
    let mut context = Context::new(config.size).unwrap();
    context.run(&config).unwrap();

    let n = config.size;
    assert!(context.spectrum()[n..].iter().all(|c| *c == Complex32::default()));
    assert_eq!(context.magnitude()[n], 0.0);
    assert_eq!(context.magnitude()[n + 1], 0.0);
}

#[test]
fn test_zero_tolerance_reports_failure() {
    // f32 rounding makes an exact round trip of this signal impossible
    let config = HarnessConfig { relative_tolerance: 0.0, ..HarnessConfig::default() };
    let report = run(&config).unwrap();
    assert_eq!(report.outcome, Outcome::Failure);
}

#[test]
fn test_outcome_literals() {
    assert_eq!(Outcome::Success.to_string(), "Success!");
    assert_eq!(Outcome::Failure.to_string(), "Failure!");
}
