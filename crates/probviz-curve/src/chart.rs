use probviz_stats::Family;
use serde::Serialize;

use crate::{
    config::{CurveConfig, CurveError},
    domain::DomainScale,
    polyline::{CurveKind, CurvePoint, sample_curve},
    ticks::{FractionTick, Y_DIVISIONS, discrete_label_mask, fraction_ticks, x_ticks, y_ticks},
};

/// A curve with its sampled vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlottedCurve {
    #[serde(flatten)]
    pub config: CurveConfig,
    pub label: String,
    pub points: Vec<CurvePoint>,
}

/// Everything needed to draw overlaid curves of one family on shared axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveChart {
    pub kind: CurveKind,
    pub domain: DomainScale,
    pub x_ticks: Vec<f64>,
    /// Per x tick, whether it carries a label. All true for continuous families.
    pub x_labels: Vec<bool>,
    pub y_ticks: Vec<f64>,
    /// Fraction labels of discrete uniform mass charts, tallest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fraction_ticks: Vec<FractionTick>,
    pub curves: Vec<PlottedCurve>,
}

impl CurveChart {
    /// Resolves the shared domain and samples every curve.
    ///
    /// Cumulative charts always use a `[0, 1]` y scale.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::FamilyMismatch`] if a curve is not of `family`.
    pub fn build(
        family: Family,
        curves: Vec<CurveConfig>,
        steps: usize,
        kind: CurveKind,
    ) -> Result<Self, CurveError> {
        let mut domain = DomainScale::resolve(family, &curves)?;
        if kind == CurveKind::Cumulative {
            domain.max_y = 1.0;
        }

        let x_ticks = x_ticks(&domain);
        let x_labels = if family.is_discrete() {
            discrete_label_mask(x_ticks.len())
        } else {
            vec![true; x_ticks.len()]
        };
        let fraction_ticks = if family == Family::UniformDiscrete && kind == CurveKind::Density {
            fraction_ticks(&curves.iter().map(|c| c.spec).collect::<Vec<_>>())
        } else {
            vec![]
        };

        let curves = curves
            .into_iter()
            .map(|config| PlottedCurve {
                label: config.label(),
                points: sample_curve(&config.spec, &domain, steps, kind),
                config,
            })
            .collect();

        Ok(Self {
            kind,
            domain,
            x_ticks,
            x_labels,
            y_ticks: y_ticks(domain.max_y, Y_DIVISIONS),
            fraction_ticks,
            curves,
        })
    }
}
