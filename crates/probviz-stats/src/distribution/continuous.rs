use std::f64::consts::{PI, SQRT_2};

use crate::special::erf;

/// Normal density `N(mu, sigma^2)` at `x`.
///
/// # Examples
///
/// ```
/// use probviz_stats::distribution::normal_pdf;
///
/// let peak = normal_pdf(0.0, 0.0, 1.0);
/// assert!((peak - 0.398_942_28).abs() < 1e-8);
/// ```
#[must_use]
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    (1.0 / (sigma * (2.0 * PI).sqrt())) * (-0.5 * ((x - mu) / sigma).powi(2)).exp()
}

/// Normal cumulative probability `P(X <= x)` for `X ~ N(mu, sigma^2)`.
///
/// Evaluated through the [`erf`] approximation, so the absolute error is about 1e-7.
#[must_use]
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    0.5 * (1.0 + erf((x - mu) / (sigma * SQRT_2)))
}

/// Standard normal density, `normal_pdf(x, 0, 1)`.
#[must_use]
pub fn standard_normal_pdf(x: f64) -> f64 {
    normal_pdf(x, 0.0, 1.0)
}

/// Standard normal cumulative probability, `normal_cdf(x, 0, 1)`.
#[must_use]
pub fn standard_normal_cdf(x: f64) -> f64 {
    normal_cdf(x, 0.0, 1.0)
}

/// Exponential density with rate `lambda`; zero for negative `x`.
#[must_use]
pub fn exponential_pdf(x: f64, lambda: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    lambda * (-lambda * x).exp()
}

/// Exponential cumulative probability with rate `lambda`; zero for negative `x`.
#[must_use]
pub fn exponential_cdf(x: f64, lambda: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    1.0 - (-lambda * x).exp()
}

/// Continuous uniform density on `[a, b]`.
///
/// A point mass (`a == b`) has infinite density at `a` and zero elsewhere.
#[expect(clippy::float_cmp)]
#[must_use]
pub fn uniform_pdf(x: f64, a: f64, b: f64) -> f64 {
    if x < a || x > b {
        return 0.0;
    }
    if a == b {
        return f64::INFINITY;
    }
    1.0 / (b - a)
}

/// Continuous uniform cumulative probability on `[a, b]`.
#[must_use]
pub fn uniform_cdf(x: f64, a: f64, b: f64) -> f64 {
    if x < a {
        return 0.0;
    }
    if x >= b {
        return 1.0;
    }
    (x - a) / (b - a)
}
