use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    ci::CiArg, clt::CltArg, curve::CurveArg, quantile::QuantileArg, ztest::ZTestArg,
};

mod ci;
mod clt;
mod curve;
mod quantile;
mod ztest;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug events to stderr (overridden by `RUST_LOG`)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Draw samples from a population and summarize the sample means
    Clt(#[clap(flatten)] CltArg),
    /// Check how often confidence intervals cover the true mean
    Ci(#[clap(flatten)] CiArg),
    /// Run a one-sample z-test with known sigma
    Ztest(#[clap(flatten)] ZTestArg),
    /// Lay out overlaid density or cumulative curves of one family
    Curve(#[clap(flatten)] CurveArg),
    /// Inverse standard normal CDF
    Quantile(#[clap(flatten)] QuantileArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Clt(arg) => clt::run(&arg)?,
        Mode::Ci(arg) => ci::run(&arg)?,
        Mode::Ztest(arg) => ztest::run(&arg)?,
        Mode::Curve(arg) => curve::run(&arg)?,
        Mode::Quantile(arg) => quantile::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = if verbose > 0 { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
