use serde::{Deserialize, Serialize};

use super::{
    exponential_cdf, exponential_pdf, normal_cdf, normal_pdf, poisson_cdf, poisson_pmf,
    uniform_cdf, uniform_discrete_cdf, uniform_discrete_pmf, uniform_pdf,
};

/// Distribution family, without parameters.
///
/// Used where a family must be known even when no parameterization is present,
/// for example to pick the default plotting domain of an empty curve list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    #[display("normal")]
    Normal,
    #[display("exponential")]
    Exponential,
    #[display("uniform")]
    Uniform,
    #[display("poisson")]
    Poisson,
    #[display("uniform-discrete")]
    UniformDiscrete,
}

impl Family {
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::Exponential,
        Self::Uniform,
        Self::Poisson,
        Self::UniformDiscrete,
    ];

    /// Parameter names in positional order.
    #[must_use]
    pub const fn param_names(self) -> &'static [&'static str] {
        match self {
            Self::Normal => &["mu", "sigma"],
            Self::Exponential | Self::Poisson => &["lambda"],
            Self::Uniform | Self::UniformDiscrete => &["a", "b"],
        }
    }

    /// Returns `true` for families with integer support.
    #[must_use]
    pub const fn is_discrete(self) -> bool {
        matches!(self, Self::Poisson | Self::UniformDiscrete)
    }

    /// Parameterization used when only the family is given.
    #[must_use]
    pub const fn default_spec(self) -> DistributionSpec {
        match self {
            Self::Normal => DistributionSpec::Normal {
                mu: 0.0,
                sigma: 1.0,
            },
            Self::Exponential => DistributionSpec::Exponential { lambda: 1.0 },
            Self::Uniform => DistributionSpec::Uniform { a: 0.0, b: 5.0 },
            Self::Poisson => DistributionSpec::Poisson { lambda: 1.0 },
            Self::UniformDiscrete => DistributionSpec::UniformDiscrete { a: 0, b: 5 },
        }
    }
}

/// Rejected distribution parameters.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParamError {
    #[display("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[display("parameter `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[display("parameter `{name}` must be an integer, got {value}")]
    NonInteger { name: &'static str, value: f64 },
    #[display("lower bound {a} exceeds upper bound {b}")]
    InvertedBounds { a: f64, b: f64 },
    #[display("{family} takes {expected} parameter(s), got {actual}")]
    WrongCount {
        family: Family,
        expected: usize,
        actual: usize,
    },
}

/// A parameterized distribution.
///
/// Every capability (density, cumulative probability, moments, sampling in
/// `probviz-sampling`, plotting domain in `probviz-curve`) is implemented by an
/// exhaustive `match` over this enum, so adding a family fails to compile until
/// every capability handles it.
///
/// Discrete families take integer arguments through [`Self::pdf`] and [`Self::cdf`]:
/// the mass at a non-integer `x` is zero and the cumulative probability is
/// evaluated at `floor(x)`.
///
/// # Examples
///
/// ```
/// use probviz_stats::distribution::{DistributionSpec, Family};
///
/// let spec: DistributionSpec = "poisson(3)".parse().unwrap();
/// assert_eq!(spec.family(), Family::Poisson);
/// assert_eq!(spec.mean(), 3.0);
/// assert!((spec.cdf(2.0) - spec.pdf(0.0) - spec.pdf(1.0) - spec.pdf(2.0)).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "kebab-case")]
pub enum DistributionSpec {
    Normal { mu: f64, sigma: f64 },
    Exponential { lambda: f64 },
    Uniform { a: f64, b: f64 },
    Poisson { lambda: f64 },
    UniformDiscrete { a: i64, b: i64 },
}

impl DistributionSpec {
    /// Checked normal constructor (`sigma > 0`).
    pub fn normal(mu: f64, sigma: f64) -> Result<Self, ParamError> {
        Self::Normal { mu, sigma }.validated()
    }

    /// Checked exponential constructor (`lambda > 0`).
    pub fn exponential(lambda: f64) -> Result<Self, ParamError> {
        Self::Exponential { lambda }.validated()
    }

    /// Checked continuous uniform constructor (`a <= b`).
    pub fn uniform(a: f64, b: f64) -> Result<Self, ParamError> {
        Self::Uniform { a, b }.validated()
    }

    /// Checked Poisson constructor (`lambda > 0`).
    pub fn poisson(lambda: f64) -> Result<Self, ParamError> {
        Self::Poisson { lambda }.validated()
    }

    /// Checked discrete uniform constructor (`a <= b`).
    pub fn uniform_discrete(a: i64, b: i64) -> Result<Self, ParamError> {
        Self::UniformDiscrete { a, b }.validated()
    }

    /// Builds a checked distribution from positional parameters.
    ///
    /// `params` follows [`Family::param_names`]. Discrete bounds must be integral.
    ///
    /// # Examples
    ///
    /// ```
    /// use probviz_stats::distribution::{DistributionSpec, Family, ParamError};
    ///
    /// let spec = DistributionSpec::from_params(Family::Normal, &[1.0, 2.0]).unwrap();
    /// assert_eq!(spec, DistributionSpec::Normal { mu: 1.0, sigma: 2.0 });
    /// assert!(matches!(
    ///     DistributionSpec::from_params(Family::UniformDiscrete, &[0.5, 3.0]),
    ///     Err(ParamError::NonInteger { .. })
    /// ));
    /// ```
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_params(family: Family, params: &[f64]) -> Result<Self, ParamError> {
        fn integer(name: &'static str, value: f64) -> Result<i64, ParamError> {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name, value });
            }
            if value.fract() != 0.0 || value.abs() > 2f64.powi(53) {
                return Err(ParamError::NonInteger { name, value });
            }
            Ok(value as i64)
        }

        let expected = family.param_names().len();
        if params.len() != expected {
            return Err(ParamError::WrongCount {
                family,
                expected,
                actual: params.len(),
            });
        }
        match family {
            Family::Normal => Self::normal(params[0], params[1]),
            Family::Exponential => Self::exponential(params[0]),
            Family::Uniform => Self::uniform(params[0], params[1]),
            Family::Poisson => Self::poisson(params[0]),
            Family::UniformDiscrete => {
                Self::uniform_discrete(integer("a", params[0])?, integer("b", params[1])?)
            }
        }
    }

    fn validated(self) -> Result<Self, ParamError> {
        self.validate()?;
        Ok(self)
    }

    /// Checks the family-specific parameter domain.
    #[expect(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), ParamError> {
        fn finite(name: &'static str, value: f64) -> Result<f64, ParamError> {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ParamError::NonFinite { name, value })
            }
        }
        fn positive(name: &'static str, value: f64) -> Result<(), ParamError> {
            if finite(name, value)? > 0.0 {
                Ok(())
            } else {
                Err(ParamError::NonPositive { name, value })
            }
        }

        match *self {
            Self::Normal { mu, sigma } => {
                finite("mu", mu)?;
                positive("sigma", sigma)
            }
            Self::Exponential { lambda } | Self::Poisson { lambda } => positive("lambda", lambda),
            Self::Uniform { a, b } => {
                if finite("a", a)? > finite("b", b)? {
                    return Err(ParamError::InvertedBounds { a, b });
                }
                Ok(())
            }
            Self::UniformDiscrete { a, b } => {
                if a > b {
                    return Err(ParamError::InvertedBounds {
                        a: a as f64,
                        b: b as f64,
                    });
                }
                Ok(())
            }
        }
    }

    #[must_use]
    pub const fn family(&self) -> Family {
        match self {
            Self::Normal { .. } => Family::Normal,
            Self::Exponential { .. } => Family::Exponential,
            Self::Uniform { .. } => Family::Uniform,
            Self::Poisson { .. } => Family::Poisson,
            Self::UniformDiscrete { .. } => Family::UniformDiscrete,
        }
    }

    #[must_use]
    pub const fn is_discrete(&self) -> bool {
        self.family().is_discrete()
    }

    /// Parameters in positional order, matching [`Family::param_names`].
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn params(&self) -> Vec<f64> {
        match *self {
            Self::Normal { mu, sigma } => vec![mu, sigma],
            Self::Exponential { lambda } | Self::Poisson { lambda } => vec![lambda],
            Self::Uniform { a, b } => vec![a, b],
            Self::UniformDiscrete { a, b } => vec![a as f64, b as f64],
        }
    }

    /// Density (continuous families) or mass (discrete families) at `x`.
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            Self::Normal { mu, sigma } => normal_pdf(x, mu, sigma),
            Self::Exponential { lambda } => exponential_pdf(x, lambda),
            Self::Uniform { a, b } => uniform_pdf(x, a, b),
            Self::Poisson { lambda } => integer_arg(x).map_or(0.0, |k| poisson_pmf(k, lambda)),
            Self::UniformDiscrete { a, b } => {
                integer_arg(x).map_or(0.0, |k| uniform_discrete_pmf(k, a, b))
            }
        }
    }

    /// Cumulative probability `P(X <= x)`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            Self::Normal { mu, sigma } => normal_cdf(x, mu, sigma),
            Self::Exponential { lambda } => exponential_cdf(x, lambda),
            Self::Uniform { a, b } => uniform_cdf(x, a, b),
            Self::Poisson { lambda } => poisson_cdf(floor_arg(x), lambda),
            Self::UniformDiscrete { a, b } => uniform_discrete_cdf(floor_arg(x), a, b),
        }
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Normal { mu, .. } => mu,
            Self::Exponential { lambda } => 1.0 / lambda,
            Self::Uniform { a, b } => (a + b) / 2.0,
            Self::Poisson { lambda } => lambda,
            Self::UniformDiscrete { a, b } => (a + b) as f64 / 2.0,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn variance(&self) -> f64 {
        match *self {
            Self::Normal { sigma, .. } => sigma * sigma,
            Self::Exponential { lambda } => 1.0 / (lambda * lambda),
            Self::Uniform { a, b } => (b - a).powi(2) / 12.0,
            Self::Poisson { lambda } => lambda,
            Self::UniformDiscrete { a, b } => {
                let n = (b - a + 1) as f64;
                (n * n - 1.0) / 12.0
            }
        }
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Default for DistributionSpec {
    fn default() -> Self {
        Family::Normal.default_spec()
    }
}

/// Integer value of `x`, or `None` when `x` has a fractional part.
#[expect(clippy::cast_possible_truncation)]
fn integer_arg(x: f64) -> Option<i64> {
    (x.is_finite() && x.fract() == 0.0).then_some(x as i64)
}

/// `floor(x)` as an integer, saturating at the `i64` range.
#[expect(clippy::cast_possible_truncation)]
fn floor_arg(x: f64) -> i64 {
    x.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_constructors() {
        assert!(DistributionSpec::normal(0.0, 1.0).is_ok());
        assert_eq!(
            DistributionSpec::normal(0.0, 0.0),
            Err(ParamError::NonPositive {
                name: "sigma",
                value: 0.0
            })
        );
        assert!(matches!(
            DistributionSpec::normal(f64::NAN, 1.0),
            Err(ParamError::NonFinite { name: "mu", .. })
        ));
        assert!(DistributionSpec::exponential(-1.0).is_err());
        assert!(DistributionSpec::poisson(f64::INFINITY).is_err());
        assert!(DistributionSpec::uniform(2.0, 2.0).is_ok());
        assert_eq!(
            DistributionSpec::uniform(3.0, 2.0),
            Err(ParamError::InvertedBounds { a: 3.0, b: 2.0 })
        );
        assert!(DistributionSpec::uniform_discrete(5, 1).is_err());
    }

    #[test]
    fn test_discrete_pdf_at_non_integer_is_zero() {
        let spec = DistributionSpec::UniformDiscrete { a: 1, b: 5 };
        assert_eq!(spec.pdf(3.0), 0.2);
        assert_eq!(spec.pdf(3.5), 0.0);
        assert_eq!(spec.cdf(3.5), 0.6);
        let spec = DistributionSpec::Poisson { lambda: 2.0 };
        assert_eq!(spec.pdf(0.5), 0.0);
        assert_eq!(spec.cdf(-0.5), 0.0);
    }

    #[test]
    fn test_moments() {
        let cases = [
            (DistributionSpec::Normal { mu: 2.0, sigma: 3.0 }, 2.0, 9.0),
            (DistributionSpec::Exponential { lambda: 2.0 }, 0.5, 0.25),
            (DistributionSpec::Uniform { a: 0.0, b: 6.0 }, 3.0, 3.0),
            (DistributionSpec::Poisson { lambda: 4.0 }, 4.0, 4.0),
            (DistributionSpec::UniformDiscrete { a: 1, b: 6 }, 3.5, 35.0 / 12.0),
        ];
        for (spec, mean, variance) in cases {
            assert!((spec.mean() - mean).abs() < 1e-12, "{spec:?}");
            assert!((spec.variance() - variance).abs() < 1e-12, "{spec:?}");
        }
    }

    #[test]
    fn test_default_specs_are_valid() {
        for family in Family::ALL {
            let spec = family.default_spec();
            assert_eq!(spec.family(), family);
            assert_eq!(spec.params().len(), family.param_names().len());
            spec.validate().unwrap();
        }
    }

    #[test]
    fn test_serde_tagged_representation() {
        let spec = DistributionSpec::Normal { mu: 0.0, sigma: 1.0 };
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"family":"normal","mu":0.0,"sigma":1.0}"#);
        let back: DistributionSpec =
            serde_json::from_str(r#"{"family":"uniform-discrete","a":1,"b":5}"#).unwrap();
        assert_eq!(back, DistributionSpec::UniformDiscrete { a: 1, b: 5 });
    }
}
