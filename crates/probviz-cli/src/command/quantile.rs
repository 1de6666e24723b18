use std::path::PathBuf;

use probviz_stats::special::{ProbabilityOutOfRange, norm_s_inv};
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct QuantileArg {
    /// Cumulative probability, strictly between 0 and 1
    #[arg(long)]
    p: f64,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Quantile {
    p: f64,
    z: f64,
}

impl Quantile {
    fn new(p: f64) -> Result<Self, ProbabilityOutOfRange> {
        Ok(Self {
            p,
            z: norm_s_inv(p)?,
        })
    }
}

pub(crate) fn run(arg: &QuantileArg) -> anyhow::Result<()> {
    let quantile = Quantile::new(arg.p)?;
    Output::save_json(&quantile, arg.output.clone())
}
