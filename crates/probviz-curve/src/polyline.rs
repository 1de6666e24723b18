use probviz_stats::{DistributionSpec, Family};
use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainScale, EXPONENTIAL_GRID_STEPS, NORMAL_GRID_STEPS, UNIFORM_GRID_STEPS, grid,
};

/// Which function of a distribution a curve shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveKind {
    /// Density for continuous families, mass for discrete ones.
    #[default]
    Density,
    Cumulative,
}

/// A vertex of a sampled curve, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Grid steps a chart of `family` uses when none are requested.
///
/// Discrete families are sampled per category and ignore this value.
#[must_use]
pub const fn default_steps(family: Family) -> usize {
    match family {
        Family::Normal | Family::Poisson | Family::UniformDiscrete => NORMAL_GRID_STEPS,
        Family::Exponential => EXPONENTIAL_GRID_STEPS,
        Family::Uniform => UNIFORM_GRID_STEPS,
    }
}

/// Samples `spec` over `domain` for drawing.
///
/// Continuous families are evaluated at `steps + 1` evenly spaced x values
/// from `min_x` to `max_x`. Discrete families produce one point per integer
/// category and ignore `steps`. Points with a non-finite value (the density of
/// a zero-width uniform) are left out.
///
/// # Examples
///
/// ```
/// use probviz_curve::{COMMON_COLORS, CurveConfig, CurveKind, DomainScale, sample_curve};
/// use probviz_stats::{DistributionSpec, Family};
///
/// let spec = DistributionSpec::Poisson { lambda: 2.0 };
/// let domain = DomainScale::resolve(Family::Poisson, &[CurveConfig::new(spec, COMMON_COLORS[0])]).unwrap();
/// let cdf = sample_curve(&spec, &domain, 0, CurveKind::Cumulative);
/// assert_eq!(cdf.len(), 11);
/// assert!(cdf.windows(2).all(|w| w[0].y <= w[1].y));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_curve(
    spec: &DistributionSpec,
    domain: &DomainScale,
    steps: usize,
    kind: CurveKind,
) -> Vec<CurvePoint> {
    let eval = |x: f64| match kind {
        CurveKind::Density => spec.pdf(x),
        CurveKind::Cumulative => spec.cdf(x),
    };
    let xs: Box<dyn Iterator<Item = f64>> = if spec.is_discrete() {
        Box::new(domain.categories().map(|k| k as f64))
    } else {
        Box::new(grid(domain.min_x, domain.max_x, steps.max(1)))
    };
    xs.map(|x| CurvePoint { x, y: eval(x) })
        .filter(|p| p.y.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::COMMON_COLORS, config::CurveConfig};

    fn domain_of(spec: DistributionSpec) -> DomainScale {
        DomainScale::resolve(spec.family(), &[CurveConfig::new(spec, COMMON_COLORS[0])]).unwrap()
    }

    #[test]
    fn test_normal_density_grid() {
        let spec = DistributionSpec::Normal { mu: 0.0, sigma: 1.0 };
        let domain = domain_of(spec);
        let points = sample_curve(&spec, &domain, default_steps(Family::Normal), CurveKind::Density);
        assert_eq!(points.len(), 201);
        assert_eq!(points[0].x, -4.0);
        assert_eq!(points[200].x, 4.0);
        // x = 0 is the midpoint of an even grid
        assert!((points[100].y - domain.max_y).abs() < 1e-12);
    }

    #[test]
    fn test_cumulative_runs_from_zero_to_one() {
        let spec = DistributionSpec::Exponential { lambda: 2.0 };
        let domain = domain_of(spec);
        let points = sample_curve(&spec, &domain, 300, CurveKind::Cumulative);
        assert_eq!(points[0].y, 0.0);
        assert!(points.last().unwrap().y > 0.99);
        assert!(points.windows(2).all(|w| w[0].y <= w[1].y));
    }

    #[test]
    fn test_discrete_mass_per_category() {
        let spec = DistributionSpec::UniformDiscrete { a: 1, b: 4 };
        let domain = domain_of(spec);
        let points = sample_curve(&spec, &domain, 999, CurveKind::Density);
        let xs = points.iter().map(|p| p.x).collect::<Vec<_>>();
        assert_eq!(xs, [1.0, 2.0, 3.0, 4.0]);
        assert!(points.iter().all(|p| p.y == 0.25));
    }

    #[test]
    fn test_point_mass_density_is_skipped() {
        let spec = DistributionSpec::Uniform { a: 0.0, b: 0.0 };
        let domain = domain_of(spec);
        // grid over [-0.1, 0.1] hits 0 at the midpoint
        let points = sample_curve(&spec, &domain, 2, CurveKind::Density);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.y == 0.0));
    }
}
