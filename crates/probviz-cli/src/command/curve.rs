use std::path::PathBuf;

use anyhow::Context as _;
use probviz_curve::{CurveChart, CurveConfig, CurveKind, default_steps, first_unused_color};
use probviz_stats::Family;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CurveArg {
    /// Distribution family shared by all curves
    #[arg(long, default_value = "normal")]
    family: Family,
    /// Curve as `p1,p2,color,name`, repeatable; the family default when omitted
    #[arg(long = "curve", value_name = "CURVE")]
    curves: Vec<String>,
    /// Grid steps for continuous families
    #[arg(long)]
    points: Option<usize>,
    /// Plot cumulative distribution functions instead of densities
    #[arg(long)]
    cdf: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_curves(family: Family, inputs: &[String]) -> anyhow::Result<Vec<CurveConfig>> {
    if inputs.is_empty() {
        return Ok(vec![CurveConfig::new(
            family.default_spec(),
            first_unused_color(&[]),
        )]);
    }
    inputs
        .iter()
        .map(|input| {
            CurveConfig::parse(family, input)
                .with_context(|| format!("Invalid {family} curve `{input}`"))
        })
        .collect()
}

pub(crate) fn run(arg: &CurveArg) -> anyhow::Result<()> {
    let curves = parse_curves(arg.family, &arg.curves)?;
    let steps = arg.points.unwrap_or(default_steps(arg.family)).max(1);
    let kind = if arg.cdf {
        CurveKind::Cumulative
    } else {
        CurveKind::Density
    };

    let chart = CurveChart::build(arg.family, curves, steps, kind)?;
    tracing::info!(
        min_x = chart.domain.min_x,
        max_x = chart.domain.max_x,
        max_y = chart.domain.max_y,
        "laid out {} curve(s)",
        chart.curves.len()
    );
    Output::save_json(&chart, arg.output.clone())
}

#[cfg(test)]
mod tests {
    use probviz_curve::COMMON_COLORS;
    use probviz_stats::DistributionSpec;

    use super::*;

    #[test]
    fn test_default_curve() {
        let curves = parse_curves(Family::Poisson, &[]).unwrap();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves[0].spec, Family::Poisson.default_spec());
        assert_eq!(curves[0].color, COMMON_COLORS[0]);
    }

    #[test]
    fn test_parse_curves() {
        let inputs = ["1,6,2563eb,die".to_owned(), "0,1,e11d48".to_owned()];
        let curves = parse_curves(Family::UniformDiscrete, &inputs).unwrap();
        assert_eq!(curves[0].spec, DistributionSpec::UniformDiscrete { a: 1, b: 6 });
        assert_eq!(curves[0].name.as_deref(), Some("die"));

        let err = parse_curves(Family::Normal, &["0,-1,2563eb".to_owned()]).unwrap_err();
        assert!(err.to_string().contains("0,-1,2563eb"));
    }
}
