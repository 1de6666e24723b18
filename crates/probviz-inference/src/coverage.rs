//! Monte Carlo demonstration of confidence interval coverage.

use probviz_sampling::{UniformSource, generate_samples};
use probviz_stats::DistributionSpec;
use serde::Serialize;

use crate::{InferenceError, level::ConfidenceLevel};

/// Confidence interval built around one sample mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
    pub covers: bool,
}

/// How many intervals contain the true mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub covered: usize,
    pub missed: usize,
    /// `covered / (covered + missed)`, or 0 for an empty batch.
    pub fraction: f64,
    pub intervals: Vec<Interval>,
}

/// Builds `mean ± z * se` around every mean and counts those containing `true_mean`.
///
/// Interval ends are inclusive.
///
/// # Errors
///
/// Returns [`InferenceError::NonPositive`] if `se` or `z` is not positive and
/// finite.
///
/// # Examples
///
/// ```
/// use probviz_inference::simulate_coverage;
///
/// let report = simulate_coverage(&[-0.5, 0.1, 2.5], 1.0, 1.96, 0.0)?;
/// assert_eq!((report.covered, report.missed), (2, 1));
/// assert!(!report.intervals[2].covers);
/// # Ok::<(), probviz_inference::InferenceError>(())
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn simulate_coverage(
    means: &[f64],
    se: f64,
    z: f64,
    true_mean: f64,
) -> Result<CoverageReport, InferenceError> {
    for (name, value) in [("standard error", se), ("critical value", z)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(InferenceError::NonPositive { name, value });
        }
    }

    let intervals = means
        .iter()
        .map(|&mean| {
            let lower = mean - z * se;
            let upper = mean + z * se;
            Interval {
                mean,
                lower,
                upper,
                covers: lower <= true_mean && true_mean <= upper,
            }
        })
        .collect::<Vec<_>>();
    let covered = intervals.iter().filter(|i| i.covers).count();
    let missed = intervals.len() - covered;
    let fraction = if intervals.is_empty() {
        0.0
    } else {
        covered as f64 / intervals.len() as f64
    };

    Ok(CoverageReport {
        covered,
        missed,
        fraction,
        intervals,
    })
}

/// A coverage run together with its settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageExperiment {
    pub level: ConfidenceLevel,
    pub z_critical: f64,
    pub sample_size: usize,
    pub standard_error: f64,
    pub report: CoverageReport,
}

/// Draws `sample_count` samples of `sample_size` standard normals and checks
/// how many `level` intervals cover the true mean 0.
///
/// With known `sigma = 1` the standard error is `1 / sqrt(sample_size)`, so the
/// covered fraction should approach `level` as `sample_count` grows.
///
/// # Errors
///
/// Returns [`InferenceError::Shape`] for an empty batch shape and
/// [`InferenceError::Quantile`] if the critical value cannot be computed.
#[expect(clippy::cast_precision_loss)]
pub fn run_coverage_experiment<S>(
    source: &mut S,
    level: ConfidenceLevel,
    sample_size: usize,
    sample_count: usize,
) -> Result<CoverageExperiment, InferenceError>
where
    S: UniformSource + ?Sized,
{
    let z_critical = level.critical_z()?;
    let population = DistributionSpec::Normal { mu: 0.0, sigma: 1.0 };
    let samples = generate_samples(&population, source, sample_count, sample_size)?;
    let standard_error = 1.0 / (sample_size as f64).sqrt();
    let report = simulate_coverage(&samples.means, standard_error, z_critical, 0.0)?;
    Ok(CoverageExperiment {
        level,
        z_critical,
        sample_size,
        standard_error,
        report,
    })
}

#[cfg(test)]
mod tests {
    use probviz_sampling::{SampleSeed, SampleShapeError};

    use super::*;

    #[test]
    fn test_interval_ends_are_inclusive() {
        let report = simulate_coverage(&[1.0, -1.0, 1.0 + 1e-9], 0.5, 2.0, 0.0).unwrap();
        assert!(report.intervals[0].covers);
        assert!(report.intervals[1].covers);
        assert!(!report.intervals[2].covers);
    }

    #[test]
    fn test_empty_batch() {
        let report = simulate_coverage(&[], 1.0, 1.96, 0.0).unwrap();
        assert_eq!(report.covered + report.missed, 0);
        assert_eq!(report.fraction, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_se() {
        assert!(matches!(
            simulate_coverage(&[0.0], 0.0, 1.96, 0.0),
            Err(InferenceError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_coverage_converges_to_level() {
        let mut source = SampleSeed::from(95).source();
        for (percent, seed_offset) in [(90.0, 0), (95.0, 1), (99.0, 2)] {
            let mut source = SampleSeed::from(1000 + seed_offset).source();
            let level = ConfidenceLevel::new(percent).unwrap();
            let experiment = run_coverage_experiment(&mut source, level, 5, 4000).unwrap();
            let expected = percent / 100.0;
            // binomial standard deviation is at most 0.005 for 4000 intervals
            assert!(
                (experiment.report.fraction - expected).abs() < 0.025,
                "{percent}%: {}",
                experiment.report.fraction
            );
            assert_eq!(experiment.report.intervals.len(), 4000);
        }
        let level = ConfidenceLevel::new(95.0).unwrap();
        let err = run_coverage_experiment(&mut source, level, 0, 10).unwrap_err();
        assert_eq!(err, InferenceError::Shape(SampleShapeError::ZeroSampleSize));
    }
}
