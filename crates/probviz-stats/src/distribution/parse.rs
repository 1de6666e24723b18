use std::{fmt, str::FromStr};

use super::{DistributionSpec, Family, ParamError};

/// Error returned when parsing a [`Family`] or [`DistributionSpec`] from text.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseDistributionError {
    #[display("unknown distribution family `{name}`")]
    #[from(ignore)]
    UnknownFamily { name: String },
    #[display("malformed distribution `{input}`, expected `family(p1, p2, ...)`")]
    #[from(ignore)]
    Malformed { input: String },
    #[display("{family} takes at most {expected} parameter(s), got {actual}")]
    #[from(ignore)]
    TooManyParams {
        family: Family,
        expected: usize,
        actual: usize,
    },
    #[display("invalid parameter `{input}` for {family}")]
    #[from(ignore)]
    InvalidNumber { family: Family, input: String },
    #[display("{_0}")]
    InvalidParam(#[error(not(source))] ParamError),
}

impl FromStr for Family {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseDistributionError::UnknownFamily {
                name: name.to_owned(),
            })
    }
}

/// Parses `family(p1, p2)` syntax, e.g. `normal(0, 1)` or `poisson(3)`.
///
/// Parameters are positional (see [`Family::param_names`]). Trailing parameters
/// may be omitted and keep the family default, and a bare family name yields
/// [`Family::default_spec`]. Discrete bounds must be integers.
///
/// # Examples
///
/// ```
/// use probviz_stats::distribution::DistributionSpec;
///
/// let spec: DistributionSpec = "normal(2, 0.5)".parse().unwrap();
/// assert_eq!(spec, DistributionSpec::Normal { mu: 2.0, sigma: 0.5 });
///
/// let spec: DistributionSpec = "exponential".parse().unwrap();
/// assert_eq!(spec, DistributionSpec::Exponential { lambda: 1.0 });
///
/// assert!("normal(0, -1)".parse::<DistributionSpec>().is_err());
/// ```
impl FromStr for DistributionSpec {
    type Err = ParseDistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let malformed = || ParseDistributionError::Malformed {
            input: input.to_owned(),
        };

        let (name, args) = match input.split_once('(') {
            Some((name, rest)) => (name, Some(rest.strip_suffix(')').ok_or_else(malformed)?)),
            None => (input, None),
        };
        let family = name.parse::<Family>()?;
        let Some(args) = args else {
            return Ok(family.default_spec());
        };

        let args = args.split(',').map(str::trim).collect::<Vec<_>>();
        let mut params = family.default_spec().params();
        if args.len() > params.len() {
            return Err(ParseDistributionError::TooManyParams {
                family,
                expected: params.len(),
                actual: args.len(),
            });
        }
        // an empty slot keeps the default of its position
        for (slot, arg) in params.iter_mut().zip(&args).filter(|(_, arg)| !arg.is_empty()) {
            let invalid = || ParseDistributionError::InvalidNumber {
                family,
                input: (*arg).to_owned(),
            };
            *slot = arg.parse::<f64>().map_err(|_| invalid())?;
        }

        Ok(DistributionSpec::from_params(family, &params)?)
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Normal { mu, sigma } => write!(f, "normal({mu}, {sigma})"),
            Self::Exponential { lambda } => write!(f, "exponential({lambda})"),
            Self::Uniform { a, b } => write!(f, "uniform({a}, {b})"),
            Self::Poisson { lambda } => write!(f, "poisson({lambda})"),
            Self::UniformDiscrete { a, b } => write!(f, "uniform-discrete({a}, {b})"),
        }
    }
}
