use std::path::PathBuf;

use probviz_inference::{ConfidenceLevel, CoverageExperiment, run_coverage_experiment};
use probviz_sampling::SampleSeed;
use serde::Serialize;

use crate::util::{self, Output};

const MAX_SAMPLE_SIZE: usize = 10_000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CiArg {
    /// Confidence level in percent
    #[arg(long, default_value_t = 90.0)]
    confidence: f64,
    /// Size of each sample drawn from the standard normal population
    #[arg(long, default_value_t = 1)]
    sample_size: usize,
    /// Number of intervals to build
    #[arg(long, default_value_t = 30)]
    sample_count: usize,
    /// 32 hex digit seed for a reproducible run
    #[arg(long)]
    seed: Option<SampleSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CiReport {
    seed: SampleSeed,
    #[serde(flatten)]
    experiment: CoverageExperiment,
}

pub(crate) fn run(arg: &CiArg) -> anyhow::Result<()> {
    let level = ConfidenceLevel::new(arg.confidence)?;
    let sample_size = util::clamp_arg("sample size", arg.sample_size, 1, MAX_SAMPLE_SIZE);
    let (seed, mut source) = util::seeded_source(arg.seed);

    let experiment = run_coverage_experiment(&mut source, level, sample_size, arg.sample_count)?;
    let report = &experiment.report;
    tracing::info!(
        covered = report.covered,
        missed = report.missed,
        "{:.1}% of {}% intervals cover the true mean",
        report.fraction * 100.0,
        level.percent(),
    );

    Output::save_json(&CiReport { seed, experiment }, arg.output.clone())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use crate::command::{CommandArgs, Mode};

    #[test]
    fn test_parses_defaults() {
        let args = CommandArgs::try_parse_from(["probviz", "ci"]).unwrap();
        let Mode::Ci(arg) = args.mode else {
            panic!("expected ci");
        };
        assert_eq!(arg.confidence, 90.0);
        assert_eq!((arg.sample_size, arg.sample_count), (1, 30));
        assert!(arg.seed.is_none());
    }

    #[test]
    fn test_parses_seed() {
        let args = CommandArgs::try_parse_from([
            "probviz",
            "ci",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();
        let Mode::Ci(arg) = args.mode else {
            panic!("expected ci");
        };
        assert_eq!(arg.seed.unwrap().to_string(), "000102030405060708090a0b0c0d0e0f");
        assert!(CommandArgs::try_parse_from(["probviz", "ci", "--seed", "xyz"]).is_err());
    }
}
