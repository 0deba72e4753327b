// src/float/math.rs

/// Agnostic sin/cos, evaluated in double precision.
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

pub(crate) fn sin(angle: f64) -> f64 {
    #[cfg(feature = "std")]
    return angle.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(angle);
}

pub(crate) fn sqrt(value: f32) -> f32 {
    #[cfg(feature = "std")]
    return value.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrtf(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn test_sin_cos() {
        let (s, c) = sin_cos(PI / 4.0);
        let sqrt2_2 = 2.0f64.sqrt() / 2.0;
        assert!((s - sqrt2_2).abs() < 1e-12);
        assert!((c - sqrt2_2).abs() < 1e-12);
        assert!((sin(PI / 6.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(25.0), 5.0);
    }
}
