use num_traits::AsPrimitive;

use crate::Float;

pub const DEFAULT_RTOL: f64 = 1e-5;
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Relative and absolute tolerances for approximate element comparison.
///
/// Two values are close when `|actual - reference| <= atol + rtol * |reference|`.
/// The comparison is directional: only the reference scales the tolerance.
/// Both tolerances must be non-negative and not NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
    /// Treat two NaNs as equal to each other.
    pub equal_nan: bool,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
            equal_nan: false,
        }
    }
}

impl Tolerance {
    pub fn new(rtol: f64, atol: f64) -> Self {
        debug_assert!(rtol >= 0.0 && atol >= 0.0, "tolerances must be non-negative");
        Self {
            rtol,
            atol,
            ..Self::default()
        }
    }

    pub fn with_rtol(mut self, rtol: f64) -> Self {
        debug_assert!(rtol >= 0.0, "rtol must be non-negative");
        self.rtol = rtol;
        self
    }

    pub fn with_atol(mut self, atol: f64) -> Self {
        debug_assert!(atol >= 0.0, "atol must be non-negative");
        self.atol = atol;
        self
    }

    pub fn with_equal_nan(mut self, equal_nan: bool) -> Self {
        self.equal_nan = equal_nan;
        self
    }

    #[inline]
    pub fn is_close<T: Float>(&self, actual: T, reference: T) -> bool {
        let a = actual.as_();
        let b = reference.as_();

        // Covers infinities of the same sign
        if a == b {
            return true;
        }

        if a.is_nan() || b.is_nan() {
            return self.equal_nan && a.is_nan() && b.is_nan();
        }

        if a.is_infinite() || b.is_infinite() {
            return false;
        }

        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let tol = Tolerance::default();
        assert_eq!(tol.rtol, 1e-5);
        assert_eq!(tol.atol, 1e-8);
        assert!(!tol.equal_nan);
    }

    #[test]
    fn relative_tolerance_scales_with_reference() {
        let tol = Tolerance::default();
        assert!(tol.is_close(1.0000001_f64, 1.0));
        assert!(tol.is_close(100_000.5_f64, 100_000.0));
        assert!(!tol.is_close(2.0_f64, 1.0));
        assert!(!tol.is_close(1e-7_f64, 0.0));
        assert!(tol.is_close(1e-9_f64, 0.0));
    }

    #[test]
    fn comparison_is_directional() {
        let tol = Tolerance::new(0.5, 0.0);
        assert!(tol.is_close(1.0_f64, 2.0));
        assert!(!tol.is_close(2.0_f64, 1.0));
    }

    #[test]
    fn nan_is_never_close_by_default() {
        let tol = Tolerance::default();
        assert!(!tol.is_close(f64::NAN, f64::NAN));
        assert!(!tol.is_close(f64::NAN, 1.0));
        assert!(!tol.is_close(1.0, f64::NAN));

        let tol = tol.with_equal_nan(true);
        assert!(tol.is_close(f64::NAN, f64::NAN));
        assert!(!tol.is_close(f64::NAN, 1.0));
    }

    #[test]
    fn infinities() {
        let tol = Tolerance::default().with_rtol(1.0).with_atol(1.0);
        assert!(tol.is_close(f64::INFINITY, f64::INFINITY));
        assert!(!tol.is_close(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!tol.is_close(f64::INFINITY, 1e300));
        assert!(!tol.is_close(1e300, f64::INFINITY));
    }

    #[test]
    fn single_precision_widens() {
        let tol = Tolerance::default();
        assert!(tol.is_close(1.000001_f32, 1.0));
        assert!(!tol.is_close(1.1_f32, 1.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-negative")]
    fn negative_tolerance_is_rejected() {
        Tolerance::new(-1e-5, 1e-8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-negative")]
    fn nan_tolerance_is_rejected() {
        Tolerance::default().with_atol(f64::NAN);
    }
}
