use std::fmt;

use probviz_stats::{DistributionSpec, Family, ParamError};
use serde::{Deserialize, Serialize};

use crate::color::{Color, ParseColorError};

/// Error returned when a curve cannot be built or plotted.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CurveError {
    #[display("curve `{input}` needs {expected} parameter(s) followed by a color")]
    #[from(ignore)]
    MissingFields { input: String, expected: usize },
    #[display("invalid number `{input}` in curve")]
    #[from(ignore)]
    InvalidNumber { input: String },
    #[display("{_0}")]
    InvalidParam(#[error(not(source))] ParamError),
    #[display("{_0}")]
    InvalidColor(#[error(not(source))] ParseColorError),
    #[display("{actual} curve cannot share an axis with {expected} curves")]
    #[from(ignore)]
    FamilyMismatch { expected: Family, actual: Family },
}

/// A distribution plus the presentation metadata used when overlaying curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub spec: DistributionSpec,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CurveConfig {
    #[must_use]
    pub fn new(spec: DistributionSpec, color: Color) -> Self {
        Self {
            spec,
            color,
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses the compact `p1,p2,color,name` form used by shared links.
    ///
    /// The parameters follow [`Family::param_names`] and are all required, as is
    /// the color (with or without `#`). Everything after the color is the name,
    /// commas included. An empty name is treated as no name.
    ///
    /// # Examples
    ///
    /// ```
    /// use probviz_curve::{Color, CurveConfig};
    /// use probviz_stats::{DistributionSpec, Family};
    ///
    /// let curve = CurveConfig::parse(Family::Normal, "1,2,2563eb,Heights, adults").unwrap();
    /// assert_eq!(curve.spec, DistributionSpec::Normal { mu: 1.0, sigma: 2.0 });
    /// assert_eq!(curve.color, Color::from_rgb(0x25, 0x63, 0xeb));
    /// assert_eq!(curve.name.as_deref(), Some("Heights, adults"));
    ///
    /// let curve = CurveConfig::parse(Family::Poisson, "4,#e11d48").unwrap();
    /// assert_eq!(curve.name, None);
    /// ```
    pub fn parse(family: Family, input: &str) -> Result<Self, CurveError> {
        let expected = family.param_names().len();
        let mut fields = input.splitn(expected + 2, ',');

        let params = fields
            .by_ref()
            .take(expected)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| {
                field.parse::<f64>().map_err(|_| CurveError::InvalidNumber {
                    input: field.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let color = fields.next().map(str::trim).filter(|c| !c.is_empty());
        let (true, Some(color)) = (params.len() == expected, color) else {
            return Err(CurveError::MissingFields {
                input: input.to_owned(),
                expected,
            });
        };

        let spec = DistributionSpec::from_params(family, &params)?;
        let color = color.parse::<Color>()?;
        let name = fields
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        Ok(Self { spec, color, name })
    }

    /// Legend label: the parameters, prefixed by the name when present.
    #[must_use]
    pub fn label(&self) -> String {
        let params = match self.spec {
            DistributionSpec::Normal { mu, sigma } => format!("μ={mu}, σ={sigma}"),
            DistributionSpec::Exponential { lambda } | DistributionSpec::Poisson { lambda } => {
                format!("λ={lambda}")
            }
            DistributionSpec::Uniform { a, b } => format!("a={a}, b={b}"),
            DistributionSpec::UniformDiscrete { a, b } => format!("a={a}, b={b}"),
        };
        match &self.name {
            Some(name) => format!("{name} ({params})"),
            None => params,
        }
    }
}

/// Renders the compact form accepted by [`CurveConfig::parse`].
impl fmt::Display for CurveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in self.spec.params() {
            write!(f, "{param},")?;
        }
        let color = self.color.to_string();
        f.write_str(color.trim_start_matches('#'))?;
        if let Some(name) = &self.name {
            write!(f, ",{name}")?;
        }
        Ok(())
    }
}
