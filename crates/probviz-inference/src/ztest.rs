use probviz_stats::special::ProbabilityOutOfRange;
use serde::Serialize;

use crate::{
    InferenceError,
    level::{Decision, Significance, Tail, p_value},
};

/// Display width of the domain, in standard deviations from the mean.
const MIN_HALF_WIDTH_SIGMAS: f64 = 4.0;
const MAX_HALF_WIDTH_SIGMAS: f64 = 10.0;
const MARGIN_SIGMAS: f64 = 0.5;
/// Most x ticks that fit on the axis before the step doubles.
const MAX_TICKS: usize = 7;

/// A one-sample z-test of a mean with known population standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZTest {
    pub sample_mean: f64,
    /// Hypothesized population mean.
    pub mu: f64,
    /// Known population standard deviation.
    pub sigma: f64,
    /// Sample size.
    pub n: u32,
}

/// The statistics behind a test decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    pub z: f64,
    pub z_critical: f64,
    pub p_value: f64,
    pub decision: Decision,
    pub reject_null: bool,
}

/// A closed x interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub from: f64,
    pub to: f64,
}

/// The x range shown for a test and its axis ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayDomain {
    pub min_x: f64,
    pub max_x: f64,
    pub tick_step: f64,
    pub ticks: Vec<f64>,
}

/// A test result with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZTestReport {
    pub test: ZTest,
    pub alpha: Significance,
    pub tail: Tail,
    pub standard_error: f64,
    pub result: TestResult,
    pub domain: DisplayDomain,
    /// Rejection regions on the sample-mean scale, clipped to the domain.
    pub rejection_regions: Vec<Region>,
}

impl ZTest {
    /// # Errors
    ///
    /// Returns [`InferenceError::NonPositive`] if `sigma` is not a positive
    /// finite number or `n` is zero, and [`InferenceError::NonFinite`] if a
    /// mean is not finite.
    pub fn new(sample_mean: f64, mu: f64, sigma: f64, n: u32) -> Result<Self, InferenceError> {
        for (name, value) in [("sample mean", sample_mean), ("mu", mu)] {
            if !value.is_finite() {
                return Err(InferenceError::NonFinite { name, value });
            }
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(InferenceError::NonPositive {
                name: "sigma",
                value: sigma,
            });
        }
        if n == 0 {
            return Err(InferenceError::NonPositive {
                name: "n",
                value: 0.0,
            });
        }
        Ok(Self {
            sample_mean,
            mu,
            sigma,
            n,
        })
    }

    /// `sigma / sqrt(n)`.
    #[must_use]
    pub fn standard_error(&self) -> f64 {
        self.sigma / f64::from(self.n).sqrt()
    }

    /// `(sample_mean - mu) / standard_error`.
    #[must_use]
    pub fn z(&self) -> f64 {
        (self.sample_mean - self.mu) / self.standard_error()
    }

    /// Runs the test at significance `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbabilityOutOfRange`] if the critical value cannot be
    /// computed for `alpha`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probviz_inference::{Decision, Significance, Tail, ZTest};
    ///
    /// let test = ZTest::new(103.0, 100.0, 15.0, 100)?;
    /// let result = test.evaluate(Significance::new(5.0)?, Tail::Right)?;
    /// assert!((result.z - 2.0).abs() < 1e-12);
    /// assert!((result.p_value - 0.0228).abs() < 1e-4);
    /// assert_eq!(result.decision, Decision::Reject);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn evaluate(&self, alpha: Significance, tail: Tail) -> Result<TestResult, ProbabilityOutOfRange> {
        let z = self.z();
        let z_critical = alpha.critical_z(tail)?;
        let p_value = p_value(z, tail);
        let decision = Decision::from_p_value(p_value, alpha);
        Ok(TestResult {
            z,
            z_critical,
            p_value,
            decision,
            reject_null: decision.is_reject(),
        })
    }

    /// The range drawn around `mu`.
    ///
    /// The half width covers `|z| sigma`, `z_critical sigma` and `4 sigma`, plus
    /// half a sigma of margin, but never exceeds `10 sigma`. Ticks are placed at
    /// multiples of a step aligned on `mu`; the step starts at `sigma` and doubles
    /// until at most 7 ticks fit.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn display_domain(&self, z: f64, z_critical: f64) -> DisplayDomain {
        let sigma = self.sigma;
        let reach = z.abs().max(z_critical.abs()).max(MIN_HALF_WIDTH_SIGMAS);
        let half_width = ((reach + MARGIN_SIGMAS) * sigma).min(MAX_HALF_WIDTH_SIGMAS * sigma);
        let min_x = self.mu - half_width;
        let max_x = self.mu + half_width;

        let mut tick_step = sigma;
        while tick_count(max_x - min_x, tick_step) > MAX_TICKS {
            tick_step *= 2.0;
        }
        let first = self.mu + ((min_x - self.mu) / tick_step).ceil() * tick_step;
        let last = self.mu + ((max_x - self.mu) / tick_step).floor() * tick_step;
        let steps = ((last - first) / tick_step).round().max(0.0) as usize;
        let ticks = (0..=steps)
            .map(|i| round8(first + i as f64 * tick_step))
            .collect();

        DisplayDomain {
            min_x,
            max_x,
            tick_step,
            ticks,
        }
    }

    /// Where the sample mean must fall for the test to reject, clipped to `domain`.
    #[must_use]
    pub fn rejection_regions(&self, z_critical: f64, tail: Tail, domain: &DisplayDomain) -> Vec<Region> {
        let (min_x, max_x) = (domain.min_x, domain.max_x);
        let reach = z_critical.abs() * self.standard_error();
        let left = || Region {
            from: min_x,
            to: (self.mu - reach).min(max_x).max(min_x),
        };
        let right = || Region {
            from: (self.mu + reach).max(min_x).min(max_x),
            to: max_x,
        };
        match tail {
            Tail::Left => vec![left()],
            Tail::Right => vec![right()],
            Tail::Two => vec![left(), right()],
        }
    }

    /// Evaluates the test and lays out its chart.
    ///
    /// # Errors
    ///
    /// Returns [`ProbabilityOutOfRange`] if the critical value cannot be
    /// computed for `alpha`.
    pub fn report(&self, alpha: Significance, tail: Tail) -> Result<ZTestReport, ProbabilityOutOfRange> {
        let result = self.evaluate(alpha, tail)?;
        let domain = self.display_domain(result.z, result.z_critical);
        let rejection_regions = self.rejection_regions(result.z_critical, tail, &domain);
        Ok(ZTestReport {
            test: *self,
            alpha,
            tail,
            standard_error: self.standard_error(),
            result,
            domain,
            rejection_regions,
        })
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_count(width: f64, step: f64) -> usize {
    (width / step).floor() as usize
}

fn round8(x: f64) -> f64 {
    (x * 1e8).round() / 1e8
}
