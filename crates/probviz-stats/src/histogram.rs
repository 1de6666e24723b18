use std::ops::Range;

use serde::Serialize;

/// Default number of bins used by the sample visualizers.
pub const DEFAULT_BIN_COUNT: usize = 40;

/// An equal-width histogram over the observed range of a dataset.
///
/// `edges` holds `bin_count + 1` boundaries and `counts` holds `bin_count`
/// frequencies. Every input value is counted exactly once, so
/// `counts.iter().sum() == values.len()`.
///
/// # Binning policy
///
/// - The range is `[min, max]` of the data, found in one pass.
/// - A value `v` goes to bin `floor((v - min) / (max - min) * bin_count)`.
/// - Bins are half-open `[lo, hi)` except the last one, which is closed: the
///   index is clamped to `bin_count - 1`, so `v == max` lands in the last bin
///   instead of a nonexistent bin `bin_count`.
/// - When every value is equal the range is empty. All edges are set to that
///   value and the whole mass goes to bin 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Bin boundaries in ascending order (`bin_count + 1` entries).
    pub edges: Vec<f64>,
    /// Frequency of each bin (`bin_count` entries).
    pub counts: Vec<u64>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin.
    pub count: u64,
}

impl Histogram {
    /// Bins `values` into `bin_count` equal-width bins.
    ///
    /// Empty input or `bin_count == 0` yields an empty histogram (no edges, no counts).
    /// Values are expected to be finite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use probviz_stats::histogram::Histogram;
    /// let histogram = Histogram::new(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
    /// assert_eq!(histogram.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    /// // 4.0 is the maximum and shares the last bin with 3.0
    /// assert_eq!(histogram.counts, vec![1, 1, 1, 2]);
    ///
    /// let degenerate = Histogram::new(&[7.0, 7.0, 7.0], 4);
    /// assert_eq!(degenerate.edges, vec![7.0; 5]);
    /// assert_eq!(degenerate.counts, vec![3, 0, 0, 0]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new(values: &[f64], bin_count: usize) -> Self {
        if values.is_empty() || bin_count == 0 {
            return Self {
                edges: vec![],
                counts: vec![],
            };
        }

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });

        let mut counts = vec![0; bin_count];
        let range = max - min;
        if range <= 0.0 {
            counts[0] = values.len() as u64;
            return Self {
                edges: vec![min; bin_count + 1],
                counts,
            };
        }

        let edges = (0..=bin_count)
            .map(|i| min + range * (i as f64 / bin_count as f64))
            .collect();
        for &v in values {
            // negative positions saturate to 0 on the cast
            let idx = (((v - min) / range) * bin_count as f64).floor() as usize;
            counts[idx.min(bin_count - 1)] += 1;
        }

        Self { edges, counts }
    }

    /// Same as [`Self::new`] with [`DEFAULT_BIN_COUNT`] bins.
    #[must_use]
    pub fn with_default_bins(values: &[f64]) -> Self {
        Self::new(values, DEFAULT_BIN_COUNT)
    }

    /// Number of bins.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bin count, at least 1 so it can be used as a vertical scale.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Iterates over the bins with their value ranges.
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| HistogramBin {
                range: edge[0]..edge[1],
                count,
            })
    }
}
