//! Per-family random variate generators.
//!
//! Each function draws one value from its family using only
//! [`UniformSource::next_uniform`]. Parameters are assumed valid; build a
//! [`DistributionSpec`] through its checked constructors to get that guarantee.

use std::f64::consts::PI;

use probviz_stats::DistributionSpec;

use crate::UniformSource;

/// Draws until the source yields a strictly positive value.
fn next_nonzero<S>(source: &mut S) -> f64
where
    S: UniformSource + ?Sized,
{
    loop {
        let u = source.next_uniform();
        if u > 0.0 {
            return u;
        }
    }
}

/// Draws a normal variate with the Box-Muller transform.
///
/// Two uniforms `u` and `v` are drawn (each redrawn while zero) and combined as
/// `mu + sigma * sqrt(-2 ln u) * cos(2 pi v)`.
#[must_use]
pub fn sample_normal<S>(source: &mut S, mu: f64, sigma: f64) -> f64
where
    S: UniformSource + ?Sized,
{
    let u = next_nonzero(source);
    let v = next_nonzero(source);
    mu + sigma * (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Draws an exponential variate by inverse transform: `-ln(u) / lambda`.
#[must_use]
pub fn sample_exponential<S>(source: &mut S, lambda: f64) -> f64
where
    S: UniformSource + ?Sized,
{
    -next_nonzero(source).ln() / lambda
}

/// Draws a continuous uniform variate in `[a, b)`.
#[must_use]
pub fn sample_uniform<S>(source: &mut S, a: f64, b: f64) -> f64
where
    S: UniformSource + ?Sized,
{
    a + source.next_uniform() * (b - a)
}

/// Draws a Poisson variate with Knuth's multiplication method.
///
/// Uniforms are multiplied until the running product falls to `exp(-lambda)`;
/// the number of factors minus one is the result. The product is tracked as a
/// sum of logarithms so that `exp(-lambda)` cannot underflow for large `lambda`.
/// Expected cost is `lambda + 1` draws.
#[must_use]
pub fn sample_poisson<S>(source: &mut S, lambda: f64) -> u64
where
    S: UniformSource + ?Sized,
{
    let mut k = 0;
    let mut log_product = 0.0;
    loop {
        k += 1;
        log_product += source.next_uniform().ln();
        if log_product <= -lambda {
            return k - 1;
        }
    }
}

/// Draws an integer uniformly from `a..=b`.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn sample_uniform_discrete<S>(source: &mut S, a: i64, b: i64) -> i64
where
    S: UniformSource + ?Sized,
{
    let width = (b - a + 1) as f64;
    let offset = (source.next_uniform() * width).floor() as i64;
    // guards u * width rounding up to width
    (a + offset).min(b)
}

/// A distribution that can produce random draws.
pub trait Sampler {
    /// Draws one value. Discrete families return integral values.
    fn sample<S>(&self, source: &mut S) -> f64
    where
        S: UniformSource + ?Sized;
}

impl Sampler for DistributionSpec {
    #[expect(clippy::cast_precision_loss)]
    fn sample<S>(&self, source: &mut S) -> f64
    where
        S: UniformSource + ?Sized,
    {
        match *self {
            Self::Normal { mu, sigma } => sample_normal(source, mu, sigma),
            Self::Exponential { lambda } => sample_exponential(source, lambda),
            Self::Uniform { a, b } => sample_uniform(source, a, b),
            Self::Poisson { lambda } => sample_poisson(source, lambda) as f64,
            Self::UniformDiscrete { a, b } => sample_uniform_discrete(source, a, b) as f64,
        }
    }
}
