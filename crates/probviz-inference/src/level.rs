use probviz_stats::{
    distribution::standard_normal_cdf,
    special::{ProbabilityOutOfRange, norm_s_inv},
};
use serde::{Deserialize, Serialize};

/// Error returned when a percentage is outside the open interval `(0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("{what} {value}% must lie strictly between 0% and 100%")]
pub struct LevelError {
    pub what: &'static str,
    pub value: f64,
}

/// Which side(s) of the distribution count as extreme.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Tail {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[default]
    #[display("two")]
    Two,
}

fn percent(what: &'static str, value: f64) -> Result<f64, LevelError> {
    if value > 0.0 && value < 100.0 {
        Ok(value)
    } else {
        Err(LevelError { what, value })
    }
}

/// Critical values of the usual confidence levels, as printed in z tables.
const Z_TABLE: [(f64, f64); 3] = [(90.0, 1.645), (95.0, 1.96), (99.0, 2.576)];

/// Confidence level of an interval, in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// # Errors
    ///
    /// Returns [`LevelError`] unless `0 < percent < 100`.
    pub fn new(percent: f64) -> Result<Self, LevelError> {
        self::percent("confidence level", percent).map(Self)
    }

    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// Two-sided critical value `z` with `P(-z < Z < z) = level`.
    ///
    /// 90%, 95% and 99% use the rounded z-table values; other levels use
    /// `norm_s_inv(1 - (1 - level) / 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbabilityOutOfRange`] when the level is so close to 100% that
    /// the target probability rounds to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use probviz_inference::ConfidenceLevel;
    ///
    /// assert_eq!(ConfidenceLevel::new(95.0)?.critical_z()?, 1.96);
    /// let z = ConfidenceLevel::new(93.0)?.critical_z()?;
    /// assert!((z - 1.8119).abs() < 1e-4);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[expect(clippy::float_cmp)]
    pub fn critical_z(self) -> Result<f64, ProbabilityOutOfRange> {
        if let Some(&(_, z)) = Z_TABLE.iter().find(|(level, _)| *level == self.0) {
            return Ok(z);
        }
        norm_s_inv(1.0 - (1.0 - self.0 / 100.0) / 2.0)
    }
}

/// Significance level `alpha` of a test, in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Significance(f64);

impl Significance {
    /// # Errors
    ///
    /// Returns [`LevelError`] unless `0 < percent < 100`.
    pub fn new(percent: f64) -> Result<Self, LevelError> {
        self::percent("significance level", percent).map(Self)
    }

    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// `alpha` as a probability.
    #[must_use]
    pub fn probability(self) -> f64 {
        self.0 / 100.0
    }

    /// Critical value bounding the rejection region.
    ///
    /// One-tailed tests use `norm_s_inv(1 - alpha)`, two-tailed tests
    /// `norm_s_inv(1 - alpha / 2)`. The value is positive for every tail; a
    /// left-tailed test rejects below `-z`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbabilityOutOfRange`] when the target probability rounds to 1.
    pub fn critical_z(self, tail: Tail) -> Result<f64, ProbabilityOutOfRange> {
        let alpha = self.probability();
        let p = match tail {
            Tail::Left | Tail::Right => 1.0 - alpha,
            Tail::Two => 1.0 - alpha / 2.0,
        };
        norm_s_inv(p)
    }
}

/// Probability of a standard normal statistic at least as extreme as `z`.
///
/// ```
/// use probviz_inference::{Tail, p_value};
///
/// assert!((p_value(1.96, Tail::Two) - 0.05).abs() < 1e-4);
/// assert!((p_value(0.0, Tail::Left) - 0.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn p_value(z: f64, tail: Tail) -> f64 {
    match tail {
        Tail::Left => standard_normal_cdf(z),
        Tail::Right => 1.0 - standard_normal_cdf(z),
        Tail::Two => 2.0 * (1.0 - standard_normal_cdf(z.abs())),
    }
}

/// Outcome of a hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    #[display("reject")]
    Reject,
    #[display("fail-to-reject")]
    FailToReject,
}

impl Decision {
    /// Rejects the null hypothesis iff `p_value < alpha`.
    ///
    /// A p-value equal to alpha is not significant.
    #[must_use]
    pub fn from_p_value(p_value: f64, alpha: Significance) -> Self {
        if p_value < alpha.probability() {
            Self::Reject
        } else {
            Self::FailToReject
        }
    }

    #[must_use]
    pub const fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}
