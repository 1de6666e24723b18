use std::path::PathBuf;

use probviz_inference::{Significance, Tail, ZTest};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ZTestArg {
    /// Observed sample mean
    #[arg(long, default_value_t = 1.2)]
    sample_mean: f64,
    /// Population mean under the null hypothesis
    #[arg(long, default_value_t = 1.0)]
    mu: f64,
    /// Known population standard deviation
    #[arg(long, default_value_t = 1.0)]
    sigma: f64,
    /// Sample size
    #[arg(long, default_value_t = 30)]
    n: u32,
    /// Significance level in percent
    #[arg(long, default_value_t = 5.0)]
    alpha: f64,
    /// Rejection tail: left, right or two
    #[arg(long, default_value = "two")]
    tail: Tail,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ZTestArg) -> anyhow::Result<()> {
    let alpha = Significance::new(util::clamp_arg("alpha", arg.alpha, 1.0, 99.0))?;
    let sigma = util::clamp_arg("sigma", arg.sigma, 0.1, 1000.0);
    let n = util::clamp_arg("n", arg.n, 1, 10_000);
    let test = ZTest::new(arg.sample_mean, arg.mu, sigma, n)?;

    let report = test.report(alpha, arg.tail)?;
    tracing::info!(
        z = report.result.z,
        p_value = report.result.p_value,
        "{}",
        report.result.decision
    );
    Output::save_json(&report, arg.output.clone())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::command::{CommandArgs, Mode};

    #[test]
    fn test_parses_tail() {
        let args = CommandArgs::try_parse_from([
            "probviz",
            "ztest",
            "--sample-mean",
            "103",
            "--mu",
            "100",
            "--tail",
            "right",
        ])
        .unwrap();
        let Mode::Ztest(arg) = args.mode else {
            panic!("expected ztest");
        };
        assert_eq!(arg.tail, Tail::Right);
        assert_eq!((arg.sigma, arg.n, arg.alpha), (1.0, 30, 5.0));
        assert!(
            CommandArgs::try_parse_from(["probviz", "ztest", "--tail", "both"]).is_err()
        );
    }
}
