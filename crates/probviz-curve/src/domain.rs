//! Shared plotting domain for overlaid curves of one family.
//!
//! Every curve on a chart shares one x range and one y scale. The range is the
//! union of each curve's interesting region and the y scale is the tallest
//! density (or mass) found on a fixed grid over that range, so no curve is
//! clipped.
//!
//! | family | x range | empty list |
//! |---|---|---|
//! | normal | `[min(mu - 4 sigma), max(mu + 4 sigma)]` | `[-4, 4]` |
//! | exponential | `[0, max(ceil(-ln(0.01) / lambda))]`, at least 5 | `[0, 5]` |
//! | uniform | `[min a, max b]` padded by 10% of the span | `[0, 5]` padded |
//! | poisson | `[0, max(ceil(lambda + 4 sqrt(lambda)))]`, at least 10 | `[0, 10]` |
//! | uniform-discrete | `[min a, max b]` | `[0, 5]` |

use probviz_stats::{DistributionSpec, Family};
use serde::Serialize;

use crate::config::{CurveConfig, CurveError};

/// Grid steps used to find the tallest normal density.
pub const NORMAL_GRID_STEPS: usize = 200;
/// Grid steps used to find the tallest exponential density.
pub const EXPONENTIAL_GRID_STEPS: usize = 300;
/// Grid steps used to draw continuous uniform densities.
pub const UNIFORM_GRID_STEPS: usize = 200;

const EXPONENTIAL_MIN_MAX_X: f64 = 5.0;
const POISSON_MIN_MAX_K: f64 = 10.0;
const UNIFORM_PADDING_RATIO: f64 = 0.1;

/// The rendering domain shared by all curves on one chart.
///
/// For discrete families `min_x` and `max_x` are the integer category bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainScale {
    pub family: Family,
    pub min_x: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl DomainScale {
    /// Resolves the shared domain of `curves`, which must all be of `family`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::FamilyMismatch`] if a curve belongs to another family.
    ///
    /// # Examples
    ///
    /// ```
    /// use probviz_curve::{COMMON_COLORS, CurveConfig, DomainScale};
    /// use probviz_stats::{DistributionSpec, Family};
    ///
    /// let curve = CurveConfig::new(DistributionSpec::Exponential { lambda: 1.0 }, COMMON_COLORS[0]);
    /// let domain = DomainScale::resolve(Family::Exponential, &[curve]).unwrap();
    /// assert_eq!((domain.min_x, domain.max_x), (0.0, 5.0));
    /// assert_eq!(domain.max_y, 1.0);
    ///
    /// let empty = DomainScale::resolve(Family::Normal, &[]).unwrap();
    /// assert_eq!((empty.min_x, empty.max_x), (-4.0, 4.0));
    /// ```
    pub fn resolve(family: Family, curves: &[CurveConfig]) -> Result<Self, CurveError> {
        if let Some(curve) = curves.iter().find(|c| c.spec.family() != family) {
            return Err(CurveError::FamilyMismatch {
                expected: family,
                actual: curve.spec.family(),
            });
        }
        let specs = curves.iter().map(|c| c.spec).collect::<Vec<_>>();

        let (min_x, max_x) = x_range(family, &specs);
        let max_y = max_y(family, &specs, min_x, max_x);
        Ok(Self {
            family,
            min_x,
            max_x,
            max_y,
        })
    }

    /// Number of integer categories in a discrete domain (`max_x - min_x + 1`).
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn category_count(&self) -> usize {
        (self.max_x - self.min_x + 1.0).max(0.0) as usize
    }

    /// Integer categories of a discrete domain, in ascending order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn categories(&self) -> impl Iterator<Item = i64> + use<> {
        let min = self.min_x as i64;
        let max = self.max_x as i64;
        min..=max
    }
}

fn min_max(values: impl IntoIterator<Item = (f64, f64)>) -> (f64, f64) {
    values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| {
            (lo.min(l), hi.max(h))
        })
}

#[expect(clippy::cast_precision_loss)]
fn x_range(family: Family, specs: &[DistributionSpec]) -> (f64, f64) {
    match family {
        Family::Normal => {
            let (min, max) = min_max(specs.iter().filter_map(|spec| match *spec {
                DistributionSpec::Normal { mu, sigma } => Some((mu - 4.0 * sigma, mu + 4.0 * sigma)),
                _ => None,
            }));
            if min.is_finite() && max.is_finite() {
                (min, max)
            } else {
                (-4.0, 4.0)
            }
        }
        Family::Exponential => {
            let max = specs
                .iter()
                .filter_map(|spec| match *spec {
                    // 99th percentile
                    DistributionSpec::Exponential { lambda } => Some((-(0.01f64.ln()) / lambda).ceil()),
                    _ => None,
                })
                .fold(EXPONENTIAL_MIN_MAX_X, f64::max);
            (0.0, max)
        }
        Family::Uniform => {
            let (mut min, mut max) = min_max(specs.iter().filter_map(|spec| match *spec {
                DistributionSpec::Uniform { a, b } => Some((a, b)),
                _ => None,
            }));
            if !min.is_finite() || !max.is_finite() {
                (min, max) = (0.0, 5.0);
            }
            let span = if max > min { max - min } else { 1.0 };
            let pad = span * UNIFORM_PADDING_RATIO;
            (min - pad, max + pad)
        }
        Family::Poisson => {
            let max = specs
                .iter()
                .filter_map(|spec| match *spec {
                    DistributionSpec::Poisson { lambda } => Some((lambda + 4.0 * lambda.sqrt()).ceil()),
                    _ => None,
                })
                .fold(f64::NEG_INFINITY, f64::max);
            if max.is_finite() && max >= POISSON_MIN_MAX_K {
                (0.0, max)
            } else {
                (0.0, POISSON_MIN_MAX_K)
            }
        }
        Family::UniformDiscrete => {
            let (min, max) = min_max(specs.iter().filter_map(|spec| match *spec {
                DistributionSpec::UniformDiscrete { a, b } => Some((a as f64, b as f64)),
                _ => None,
            }));
            if min.is_finite() && max.is_finite() {
                (min, max)
            } else {
                (0.0, 5.0)
            }
        }
    }
}

/// Evenly spaced grid of `steps + 1` points over `[min, max]`.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn grid(min: f64, max: f64, steps: usize) -> impl Iterator<Item = f64> {
    (0..=steps).map(move |i| min + (max - min) * (i as f64 / steps as f64))
}

fn tallest(specs: &[DistributionSpec], xs: impl Iterator<Item = f64>) -> f64 {
    xs.flat_map(|x| specs.iter().map(move |spec| spec.pdf(x)))
        .filter(|y| y.is_finite())
        .fold(0.0, f64::max)
}

#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn max_y(family: Family, specs: &[DistributionSpec], min_x: f64, max_x: f64) -> f64 {
    match family {
        Family::Normal => tallest(specs, grid(min_x, max_x, NORMAL_GRID_STEPS)),
        Family::Exponential => tallest(specs, grid(min_x, max_x, EXPONENTIAL_GRID_STEPS)),
        // the plateau height is known exactly; a point mass has no finite height
        Family::Uniform => specs
            .iter()
            .filter_map(|spec| match *spec {
                DistributionSpec::Uniform { a, b } if b > a => Some(1.0 / (b - a)),
                _ => None,
            })
            .fold(0.0, f64::max),
        Family::Poisson | Family::UniformDiscrete => {
            tallest(specs, ((min_x as i64)..=(max_x as i64)).map(|k| k as f64))
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::color::COMMON_COLORS;

    fn curves(specs: &[DistributionSpec]) -> Vec<CurveConfig> {
        specs
            .iter()
            .zip(COMMON_COLORS.iter().cycle())
            .map(|(spec, color)| CurveConfig::new(*spec, *color))
            .collect()
    }

    fn resolve(family: Family, specs: &[DistributionSpec]) -> DomainScale {
        DomainScale::resolve(family, &curves(specs)).unwrap()
    }

    #[test]
    fn test_normal_union_of_four_sigma() {
        let domain = resolve(
            Family::Normal,
            &[
                DistributionSpec::Normal { mu: 0.0, sigma: 1.0 },
                DistributionSpec::Normal { mu: 5.0, sigma: 2.0 },
            ],
        );
        assert_eq!((domain.min_x, domain.max_x), (-4.0, 13.0));
        // the 200-step grid passes near, not through, the peak at x = 0
        let peak = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        assert!(domain.max_y <= peak && domain.max_y > peak * 0.99, "{}", domain.max_y);
    }

    #[test]
    fn test_exponential_percentile_and_floor() {
        let domain = resolve(
            Family::Exponential,
            &[DistributionSpec::Exponential { lambda: 1.0 }],
        );
        assert_eq!(domain.max_x, 5.0);

        let domain = resolve(
            Family::Exponential,
            &[
                DistributionSpec::Exponential { lambda: 2.0 },
                DistributionSpec::Exponential { lambda: 0.5 },
            ],
        );
        // ceil(4.605 / 0.5) = 10
        assert_eq!((domain.min_x, domain.max_x), (0.0, 10.0));
        assert_eq!(domain.max_y, 2.0);

        let domain = resolve(Family::Exponential, &[DistributionSpec::Exponential { lambda: 4.0 }]);
        assert_eq!(domain.max_x, 5.0);
    }

    #[test]
    fn test_poisson_bounds() {
        let domain = resolve(Family::Poisson, &[DistributionSpec::Poisson { lambda: 1.0 }]);
        assert_eq!((domain.min_x, domain.max_x), (0.0, 10.0));
        assert_eq!(domain.category_count(), 11);
        // mass at k = 0 and k = 1 are both exp(-1)
        assert!((domain.max_y - (-1.0f64).exp()).abs() < 1e-12);

        let domain = resolve(Family::Poisson, &[DistributionSpec::Poisson { lambda: 25.0 }]);
        assert_eq!(domain.max_x, 45.0);

        // ceil(2 + 4 * sqrt(2)) = 8 is raised to the floor of 10
        let domain = resolve(Family::Poisson, &[DistributionSpec::Poisson { lambda: 2.0 }]);
        assert_eq!(domain.max_x, 10.0);
        // ceil(3 + 4 * sqrt(3)) = 10 is kept
        let domain = resolve(Family::Poisson, &[DistributionSpec::Poisson { lambda: 3.0 }]);
        assert_eq!(domain.max_x, 10.0);

        let domain = resolve(Family::Poisson, &[]);
        assert_eq!(domain.max_x, 10.0);
        assert_eq!(domain.max_y, 0.0);
    }

    #[test]
    fn test_uniform_discrete_bounds() {
        let domain = resolve(
            Family::UniformDiscrete,
            &[
                DistributionSpec::UniformDiscrete { a: 1, b: 6 },
                DistributionSpec::UniformDiscrete { a: -2, b: 3 },
            ],
        );
        assert_eq!((domain.min_x, domain.max_x), (-2.0, 6.0));
        assert_eq!(domain.categories().collect::<Vec<_>>(), (-2..=6).collect::<Vec<_>>());
        assert!((domain.max_y - 1.0 / 6.0).abs() < 1e-12);

        let empty = resolve(Family::UniformDiscrete, &[]);
        assert_eq!((empty.min_x, empty.max_x), (0.0, 5.0));
    }

    #[test]
    fn test_uniform_padding() {
        let domain = resolve(Family::Uniform, &[DistributionSpec::Uniform { a: 0.0, b: 10.0 }]);
        assert_eq!((domain.min_x, domain.max_x), (-1.0, 11.0));
        assert!((domain.max_y - 0.1).abs() < 1e-12);

        let point = resolve(Family::Uniform, &[DistributionSpec::Uniform { a: 2.0, b: 2.0 }]);
        assert!((point.min_x - 1.9).abs() < 1e-12 && (point.max_x - 2.1).abs() < 1e-12);
        assert_eq!(point.max_y, 0.0);
    }

    #[test]
    fn test_family_mismatch() {
        let result = DomainScale::resolve(
            Family::Normal,
            &curves(&[DistributionSpec::Poisson { lambda: 2.0 }]),
        );
        assert_eq!(
            result,
            Err(CurveError::FamilyMismatch {
                expected: Family::Normal,
                actual: Family::Poisson,
            })
        );
    }

    proptest! {
        #[test]
        fn normal_domain_covers_every_curve(
            params in prop::collection::vec((-100.0f64..100.0, 0.01f64..50.0), 1..6),
        ) {
            let specs = params
                .iter()
                .map(|&(mu, sigma)| DistributionSpec::Normal { mu, sigma })
                .collect::<Vec<_>>();
            let domain = resolve(Family::Normal, &specs);
            for &(mu, sigma) in &params {
                prop_assert!(domain.min_x <= mu - 4.0 * sigma + 1e-9);
                prop_assert!(domain.max_x >= mu + 4.0 * sigma - 1e-9);
            }
            prop_assert!(domain.max_y > 0.0);
        }

        #[test]
        fn poisson_domain_is_at_least_ten(lambda in 0.01f64..200.0) {
            let domain = resolve(Family::Poisson, &[DistributionSpec::Poisson { lambda }]);
            prop_assert!(domain.max_x >= 10.0);
            prop_assert!(domain.max_x >= lambda);
        }
    }
}
