//! Log-log power-law primitives for S-N curves.
//!
//! Every curve segment is a straight line in `(ln N, ln σ)` space. With two anchors
//! `(N0, σ0)` and `(N1, σ1)`, `N0 < N1`, `σ0 > σ1`:
//!
//! - slope `p = (ln N1 - ln N0) / (ln σ0 - ln σ1)`
//! - stress on the segment `σ(N) = σ1 · (N1 / N)^(1/p)`
//!
//! Both go through `ln`/`powf`, so all arguments must be finite and positive.

use crate::error::CurveError;

/// Slope of the segment between `(n0, s0)` and `(n1, s1)`.
///
/// Returns `None` when a logarithm argument is not finite and positive, when the
/// stresses are equal (zero denominator), or when the slope is not a finite
/// positive number (anchors in the wrong order).
pub fn loglog_slope(n0: f64, s0: f64, n1: f64, s1: f64) -> Option<f64> {
    if ![n0, s0, n1, s1].iter().all(|v| v.is_finite() && *v > 0.0) {
        return None;
    }
    let denom = s0.ln() - s1.ln();
    if denom == 0.0 {
        return None;
    }
    let slope = (n1.ln() - n0.ln()) / denom;
    (slope.is_finite() && slope > 0.0).then_some(slope)
}

/// Stress at `cycles` on a segment through `(anchor_cycles, anchor_stress)` with `slope`.
///
/// `what` names the evaluated quantity in the error.
pub fn power_law_stress(
    anchor_stress: f64,
    anchor_cycles: f64,
    cycles: f64,
    slope: f64,
    what: &'static str,
) -> Result<f64, CurveError> {
    if !(cycles.is_finite() && cycles > 0.0) {
        return Err(CurveError::NumericDomainError { what, value: cycles });
    }
    if !(slope.is_finite() && slope > 0.0) {
        return Err(CurveError::NumericDomainError { what, value: slope });
    }
    let ratio = anchor_cycles / cycles;
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(CurveError::NumericDomainError { what, value: ratio });
    }

    let stress = anchor_stress * ratio.powf(1.0 / slope);
    if stress.is_finite() && stress > 0.0 {
        Ok(stress)
    } else {
        Err(CurveError::NumericDomainError { what, value: stress })
    }
}

/// Stress at `cycles` on the straight log-log line through `from` and `to`.
///
/// Both points are `(cycles, stress)` with finite positive values and distinct
/// cycle counts.
pub fn loglog_interpolate(from: (f64, f64), to: (f64, f64), cycles: f64) -> f64 {
    let t = (cycles.ln() - from.0.ln()) / (to.0.ln() - from.0.ln());
    (from.1.ln() + t * (to.1.ln() - from.1.ln())).exp()
}

/// Relative comparison for values that should be equal up to rounding.
pub fn nearly_equal(a: f64, b: f64, rel: f64) -> bool {
    let diff = (a - b).abs();
    diff == 0.0 || diff <= rel * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_between_anchors() {
        // One decade of cycles per decade of stress.
        let p = loglog_slope(1e3, 1000.0, 1e4, 100.0).unwrap();
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn slope_rejects_degenerate_inputs() {
        assert!(loglog_slope(1e3, 500.0, 1e6, 500.0).is_none(), "equal stresses");
        assert!(loglog_slope(0.0, 500.0, 1e6, 400.0).is_none(), "zero cycles");
        assert!(loglog_slope(1e3, -1.0, 1e6, 400.0).is_none(), "negative stress");
        assert!(loglog_slope(1e6, 500.0, 1e3, 400.0).is_none(), "cycles reversed");
        assert!(loglog_slope(1e3, f64::NAN, 1e6, 400.0).is_none(), "nan");
    }

    #[test]
    fn power_law_hits_both_anchors() {
        let p = loglog_slope(1e3, 2520.0, 3e6, 1050.0).unwrap();
        let at_end = power_law_stress(1050.0, 3e6, 3e6, p, "test").unwrap();
        let at_start = power_law_stress(1050.0, 3e6, 1e3, p, "test").unwrap();
        assert!(nearly_equal(at_end, 1050.0, 1e-12));
        assert!(nearly_equal(at_start, 2520.0, 1e-12));
    }

    #[test]
    fn interpolation_matches_power_law() {
        let p = loglog_slope(1e3, 2520.0, 1e11, 1050.0).unwrap();
        let expected = power_law_stress(1050.0, 1e11, 1e10, p, "test").unwrap();
        let got = loglog_interpolate((1e3, 2520.0), (1e11, 1050.0), 1e10);
        assert!(nearly_equal(got, expected, 1e-12));
        assert!(nearly_equal(loglog_interpolate((1e3, 2520.0), (1e11, 1050.0), 1e3), 2520.0, 1e-12));
    }

    #[test]
    fn power_law_rejects_non_positive_cycles() {
        let err = power_law_stress(1000.0, 1e6, 0.0, 5.0, "root stress").unwrap_err();
        assert_eq!(err, CurveError::NumericDomainError { what: "root stress", value: 0.0 });
        assert!(power_law_stress(1000.0, 1e6, 1e5, 0.0, "root stress").is_err());
    }
}
