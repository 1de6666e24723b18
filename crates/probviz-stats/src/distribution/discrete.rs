use crate::special::log_factorial;

/// Poisson probability mass `P(X = k)` for rate `lambda`.
///
/// Evaluated in log space as `exp(-lambda + k ln(lambda) - ln(k!))`, so large `k`
/// never overflows an intermediate factorial or power. Negative `k` has zero mass.
///
/// # Examples
///
/// ```
/// use probviz_stats::distribution::poisson_pmf;
///
/// assert!((poisson_pmf(0, 2.0) - (-2.0f64).exp()).abs() < 1e-15);
/// assert_eq!(poisson_pmf(-1, 2.0), 0.0);
/// assert!(poisson_pmf(500, 480.0) > 0.0);
/// ```
#[expect(clippy::cast_precision_loss, clippy::cast_sign_loss)]
#[must_use]
pub fn poisson_pmf(k: i64, lambda: f64) -> f64 {
    if k < 0 {
        return 0.0;
    }
    let log_p = -lambda + (k as f64) * lambda.ln() - log_factorial(k as u64);
    log_p.exp()
}

/// Poisson cumulative probability `P(X <= k)`, the sum of [`poisson_pmf`] over `0..=k`.
#[must_use]
pub fn poisson_cdf(k: i64, lambda: f64) -> f64 {
    (0..=k).map(|i| poisson_pmf(i, lambda)).sum()
}

/// Discrete uniform probability mass on the integers `a..=b`.
///
/// # Examples
///
/// ```
/// use probviz_stats::distribution::uniform_discrete_pmf;
///
/// assert_eq!(uniform_discrete_pmf(3, 1, 5), 0.2);
/// assert_eq!(uniform_discrete_pmf(0, 1, 5), 0.0);
/// assert_eq!(uniform_discrete_pmf(4, 4, 4), 1.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn uniform_discrete_pmf(k: i64, a: i64, b: i64) -> f64 {
    if k < a || k > b {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    1.0 / ((b - a + 1) as f64)
}

/// Discrete uniform cumulative probability on the integers `a..=b`.
///
/// # Examples
///
/// ```
/// use probviz_stats::distribution::uniform_discrete_cdf;
///
/// assert_eq!(uniform_discrete_cdf(3, 1, 5), 0.6);
/// assert_eq!(uniform_discrete_cdf(0, 1, 5), 0.0);
/// assert_eq!(uniform_discrete_cdf(9, 1, 5), 1.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn uniform_discrete_cdf(k: i64, a: i64, b: i64) -> f64 {
    if k < a {
        return 0.0;
    }
    if k > b {
        return 1.0;
    }
    ((k - a + 1) as f64) / ((b - a + 1) as f64)
}
