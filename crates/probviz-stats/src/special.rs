//! Special functions shared by the closed-form distributions.
//!
//! - [`erf`]: error function, Abramowitz & Stegun 7.1.26 (absolute error below 1.5e-7)
//! - [`norm_s_inv`]: standard normal quantile, rational approximation with
//!   separate lower-tail, central and upper-tail regions
//! - [`log_factorial`]: `ln(n!)` as a running sum of logarithms

/// Error returned by [`norm_s_inv`] when `p` is not inside the open interval `(0, 1)`.
///
/// The quantile function has no finite value at 0 or 1, so the caller must
/// validate the probability before asking for a quantile.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("probability {p} out of range (0, 1)")]
pub struct ProbabilityOutOfRange {
    /// The rejected probability.
    pub p: f64,
}

/// Lower tail boundary of the central region of [`norm_s_inv`].
const P_LOW: f64 = 0.02425;
/// Upper tail boundary of the central region of [`norm_s_inv`].
const P_HIGH: f64 = 1.0 - P_LOW;

/// Approximates the error function.
///
/// Uses the five-term rational polynomial of Abramowitz & Stegun formula 7.1.26,
/// evaluated on `|x|` and mirrored for negative inputs.
///
/// # Examples
///
/// ```
/// use probviz_stats::special::erf;
///
/// assert!(erf(0.0).abs() < 1e-6);
/// assert!((erf(1.0) - 0.842_700_79).abs() < 2e-7);
/// assert!((erf(-1.0) + erf(1.0)).abs() < 1e-12);
/// ```
#[allow(clippy::unreadable_literal)]
#[must_use]
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Inverse of the standard normal CDF.
///
/// Returns the `z` such that `P(Z <= z) = p` for `Z ~ N(0, 1)`. The approximation
/// switches between a tail formula for `p < 0.02425`, a central rational
/// polynomial, and the mirrored tail formula for `p > 0.97575`.
///
/// # Errors
///
/// Returns [`ProbabilityOutOfRange`] when `p <= 0`, `p >= 1`, or `p` is NaN.
///
/// # Examples
///
/// ```
/// use probviz_stats::special::norm_s_inv;
///
/// let z = norm_s_inv(0.975).unwrap();
/// assert!((z - 1.959_964).abs() < 1e-4);
///
/// assert!(norm_s_inv(0.0).is_err());
/// assert!(norm_s_inv(1.0).is_err());
/// ```
#[allow(clippy::unreadable_literal)]
pub fn norm_s_inv(p: f64) -> Result<f64, ProbabilityOutOfRange> {
    const A: [f64; 6] = [
        -39.6968302866538,
        220.946098424521,
        -275.928510446969,
        138.357751867269,
        -30.6647980661472,
        2.50662827745924,
    ];
    const B: [f64; 5] = [
        -54.4760987982241,
        161.585836858041,
        -155.698979859887,
        66.8013118877197,
        -13.2806815528857,
    ];
    const C: [f64; 6] = [
        -0.00778489400243029,
        -0.322396458041136,
        -2.40075827716184,
        -2.54973253934373,
        4.37466414146497,
        2.93816398269878,
    ];
    const D: [f64; 4] = [
        0.00778469570904146,
        0.32246712907004,
        2.445134137143,
        3.75440866190742,
    ];

    let tail = |q: f64| {
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    };

    if !(p > 0.0 && p < 1.0) {
        return Err(ProbabilityOutOfRange { p });
    }

    let z = if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    };
    Ok(z)
}

/// Computes `ln(n!)` as `ln 2 + ln 3 + ... + ln n`.
///
/// Summing logarithms keeps the result finite for arguments where `n!` itself
/// would overflow an `f64` (anything above 170).
///
/// # Examples
///
/// ```
/// use probviz_stats::special::log_factorial;
///
/// assert_eq!(log_factorial(0), 0.0);
/// assert_eq!(log_factorial(1), 0.0);
/// assert!((log_factorial(5) - 120f64.ln()).abs() < 1e-12);
/// assert!(log_factorial(1000).is_finite());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn log_factorial(n: u64) -> f64 {
    (2..=n).map(|i| (i as f64).ln()).sum()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::distribution::standard_normal_cdf;

    #[test]
    fn test_erf_known_values() {
        let cases = [
            (0.5, 0.520_499_877_8),
            (1.0, 0.842_700_792_9),
            (2.0, 0.995_322_265_0),
            (3.0, 0.999_977_909_5),
        ];
        for (x, expected) in cases {
            assert!(
                (erf(x) - expected).abs() < 2e-7,
                "erf({x}) = {}, expected {expected}",
                erf(x)
            );
            assert!((erf(-x) + expected).abs() < 2e-7);
        }
    }

    #[test]
    fn test_norm_s_inv_regions() {
        // lower tail, central, upper tail
        assert!((norm_s_inv(0.01).unwrap() + 2.326_348).abs() < 1e-5);
        assert!(norm_s_inv(0.5).unwrap().abs() < 1e-12);
        assert!((norm_s_inv(0.99).unwrap() - 2.326_348).abs() < 1e-5);
    }

    #[test]
    fn test_norm_s_inv_region_boundaries_are_continuous() {
        let below = norm_s_inv(P_LOW - 1e-12).unwrap();
        let above = norm_s_inv(P_LOW + 1e-12).unwrap();
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_norm_s_inv_rejects_out_of_range() {
        for p in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = norm_s_inv(p).unwrap_err();
            assert!(err.p.is_nan() || err.p == p);
        }
        assert_eq!(
            norm_s_inv(1.0).unwrap_err().to_string(),
            "probability 1 out of range (0, 1)"
        );
    }

    #[test]
    fn test_log_factorial_large_argument_is_finite() {
        // 171! overflows f64, its logarithm does not
        let value = log_factorial(171);
        assert!(value.is_finite());
        assert!((value - 711.714_725_1).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn erf_is_odd(x in -6.0f64..6.0) {
            prop_assert!((erf(x) + erf(-x)).abs() < 1e-12);
        }

        #[test]
        fn erf_is_bounded(x in -50.0f64..50.0) {
            prop_assert!((-1.0..=1.0).contains(&erf(x)));
        }

        #[test]
        fn norm_s_inv_inverts_the_cdf(p in 1e-12f64..1.0 - 1e-12) {
            let z = norm_s_inv(p).unwrap();
            prop_assert!((standard_normal_cdf(z) - p).abs() < 1e-6, "p = {p}, z = {z}");
        }

        #[test]
        fn norm_s_inv_inverts_the_cdf_in_the_tails(q in 1e-12f64..P_LOW) {
            let lower = norm_s_inv(q).unwrap();
            prop_assert!((standard_normal_cdf(lower) - q).abs() < 1e-6);
            let upper = norm_s_inv(1.0 - q).unwrap();
            prop_assert!((standard_normal_cdf(upper) - (1.0 - q)).abs() < 1e-6);
        }

        #[test]
        fn norm_s_inv_is_monotonic(p in 0.0001f64..0.9998, dp in 0.00001f64..0.0001) {
            prop_assert!(norm_s_inv(p).unwrap() < norm_s_inv(p + dp).unwrap());
        }
    }
}
