use std::path::PathBuf;

use anyhow::Context as _;
use probviz_sampling::{
    CltSamples, MAX_TOTAL_DRAWS, SampleSeed, generate_samples, theoretical_standard_error,
};
use probviz_stats::{DistributionSpec, descriptive::DescriptiveStats, histogram::Histogram};
use serde::Serialize;

use crate::util::{self, Output};

const MAX_SAMPLE_SIZE: usize = 10_000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CltArg {
    /// Population distribution, e.g. `normal(0, 1)`, `exponential(2)` or `uniform-discrete(1, 6)`
    #[arg(long, default_value = "normal(0, 1)")]
    dist: DistributionSpec,
    /// Number of samples to draw
    #[arg(long, default_value_t = 1000)]
    sample_count: usize,
    /// Number of draws averaged into each sample mean
    #[arg(long, default_value_t = 10)]
    sample_size: usize,
    /// Histogram bins for raw values and sample means
    #[arg(long, default_value_t = 40)]
    bins: usize,
    /// 32 hex digit seed for a reproducible run
    #[arg(long)]
    seed: Option<SampleSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Summary {
    stats: Option<DescriptiveStats>,
    histogram: Histogram,
}

#[derive(Debug, Serialize)]
struct CltReport {
    seed: SampleSeed,
    population: DistributionSpec,
    sample_count: usize,
    sample_size: usize,
    theoretical_mean: f64,
    theoretical_standard_error: f64,
    raw: Summary,
    means: Summary,
}

impl CltReport {
    fn new(seed: SampleSeed, population: DistributionSpec, samples: &CltSamples, bins: usize) -> Self {
        Self {
            seed,
            population,
            sample_count: samples.sample_count(),
            sample_size: samples.sample_size,
            theoretical_mean: population.mean(),
            theoretical_standard_error: theoretical_standard_error(&population, samples.sample_size),
            raw: Summary {
                stats: samples.raw_stats(),
                histogram: samples.raw_histogram(bins),
            },
            means: Summary {
                stats: samples.mean_stats(),
                histogram: samples.mean_histogram(bins),
            },
        }
    }
}

pub(crate) fn run(arg: &CltArg) -> anyhow::Result<()> {
    let CltArg {
        dist,
        sample_count,
        sample_size,
        bins,
        seed,
        output,
    } = arg;

    let sample_size = util::clamp_arg("sample size", *sample_size, 1, MAX_SAMPLE_SIZE);
    let bins = util::clamp_arg("bins", *bins, 1, 1000);
    let (seed, mut source) = util::seeded_source(*seed);

    tracing::info!(%dist, sample_count, sample_size, "drawing samples");
    let samples = generate_samples(dist, &mut source, *sample_count, sample_size).with_context(
        || format!("Cannot draw {sample_count} x {sample_size} values (limit {MAX_TOTAL_DRAWS})"),
    )?;

    let report = CltReport::new(seed, *dist, &samples, bins);
    if let Some(stats) = &report.means.stats {
        tracing::debug!(
            observed = stats.std_dev,
            theoretical = report.theoretical_standard_error,
            "standard error of the mean"
        );
    }
    Output::save_json(&report, output.clone())
}
