//! Batched sampling for central limit theorem demonstrations.

use probviz_stats::{DistributionSpec, descriptive::DescriptiveStats, histogram::Histogram};
use serde::Serialize;

use crate::{Sampler, UniformSource};

/// Upper bound on `sample_count * sample_size` for a single batch.
pub const MAX_TOTAL_DRAWS: usize = 10_000_000;

/// Error returned when a batch shape cannot be generated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SampleShapeError {
    #[display("sample count must be at least 1")]
    ZeroSampleCount,
    #[display("sample size must be at least 1")]
    ZeroSampleSize,
    #[display("{sample_count} samples of size {sample_size} exceed the limit of {MAX_TOTAL_DRAWS} draws")]
    TooManyDraws {
        sample_count: usize,
        sample_size: usize,
    },
}

/// Raw draws and per-group means of one batch.
///
/// `raw` holds `sample_count * sample_size` values in draw order. Group `i` is
/// `raw[i * sample_size..(i + 1) * sample_size]` and `means[i]` is its mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CltSamples {
    pub sample_size: usize,
    pub raw: Vec<f64>,
    pub means: Vec<f64>,
}

impl CltSamples {
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.means.len()
    }

    /// Iterates over the groups in draw order.
    pub fn groups(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.raw.chunks_exact(self.sample_size)
    }

    #[must_use]
    pub fn raw_stats(&self) -> Option<DescriptiveStats> {
        DescriptiveStats::new(self.raw.iter().copied())
    }

    #[must_use]
    pub fn mean_stats(&self) -> Option<DescriptiveStats> {
        DescriptiveStats::new(self.means.iter().copied())
    }

    #[must_use]
    pub fn raw_histogram(&self, bin_count: usize) -> Histogram {
        Histogram::new(&self.raw, bin_count)
    }

    #[must_use]
    pub fn mean_histogram(&self, bin_count: usize) -> Histogram {
        Histogram::new(&self.means, bin_count)
    }
}

/// Standard deviation of the mean of `sample_size` draws: `sigma / sqrt(n)`.
///
/// This is the spread the mean histogram of a [`CltSamples`] batch converges to.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn theoretical_standard_error(spec: &DistributionSpec, sample_size: usize) -> f64 {
    spec.std_dev() / (sample_size as f64).sqrt()
}

/// Draws `sample_count` groups of `sample_size` values and averages each group.
///
/// # Errors
///
/// Returns [`SampleShapeError`] if either dimension is zero or the total number
/// of draws exceeds [`MAX_TOTAL_DRAWS`].
///
/// # Examples
///
/// ```
/// use probviz_sampling::{SampleSeed, generate_samples};
/// use probviz_stats::DistributionSpec;
///
/// let mut source = SampleSeed::from(7).source();
/// let spec = DistributionSpec::Exponential { lambda: 1.0 };
/// let samples = generate_samples(&spec, &mut source, 200, 30).unwrap();
/// assert_eq!(samples.raw.len(), 6_000);
/// assert_eq!(samples.means.len(), 200);
///
/// // the means concentrate around 1 with spread 1 / sqrt(30)
/// let stats = samples.mean_stats().unwrap();
/// assert!((stats.mean - 1.0).abs() < 0.05);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn generate_samples<D, S>(
    sampler: &D,
    source: &mut S,
    sample_count: usize,
    sample_size: usize,
) -> Result<CltSamples, SampleShapeError>
where
    D: Sampler + ?Sized,
    S: UniformSource + ?Sized,
{
    if sample_count == 0 {
        return Err(SampleShapeError::ZeroSampleCount);
    }
    if sample_size == 0 {
        return Err(SampleShapeError::ZeroSampleSize);
    }
    let total = sample_count
        .checked_mul(sample_size)
        .filter(|&total| total <= MAX_TOTAL_DRAWS)
        .ok_or(SampleShapeError::TooManyDraws {
            sample_count,
            sample_size,
        })?;

    tracing::debug!(sample_count, sample_size, total, "generating samples");

    let mut raw = Vec::with_capacity(total);
    let mut means = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        let start = raw.len();
        raw.extend((0..sample_size).map(|_| sampler.sample(source)));
        let sum = raw[start..].iter().sum::<f64>();
        means.push(sum / sample_size as f64);
    }

    Ok(CltSamples {
        sample_size,
        raw,
        means,
    })
}
