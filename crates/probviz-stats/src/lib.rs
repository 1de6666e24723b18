//! Numeric distribution library for the probviz visualizers.
//!
//! This crate is pure and deterministic: no I/O, no randomness. It provides:
//!
//! - **Special functions**: erf, the inverse standard normal CDF, log-factorials
//! - **Distributions**: closed-form densities, masses and cumulative probabilities
//!   for the normal, exponential, uniform, Poisson and discrete uniform families,
//!   plus the parameterized [`DistributionSpec`]
//! - **Descriptive statistics**: mean, median, variance and range of a sample set
//! - **Histograms**: equal-width binning over the observed range
//!
//! # Modules
//!
//! - [`special`]: erf, `norm_s_inv`, `log_factorial`
//! - [`distribution`]: per-family functions and [`DistributionSpec`]
//! - [`descriptive`]: descriptive statistics for summarizing datasets
//! - [`histogram`]: histogram construction for visualizing sample sets
//!
//! # Examples
//!
//! ## Normal quantiles
//!
//! ```
//! use probviz_stats::{distribution::standard_normal_cdf, special::norm_s_inv};
//!
//! let z = norm_s_inv(0.965).unwrap();
//! assert!((z - 1.8119).abs() < 1e-4);
//! assert!((standard_normal_cdf(z) - 0.965).abs() < 1e-4);
//! ```
//!
//! ## Evaluating a parameterized distribution
//!
//! ```
//! use probviz_stats::DistributionSpec;
//!
//! let spec: DistributionSpec = "uniform-discrete(1, 5)".parse().unwrap();
//! assert_eq!(spec.pdf(3.0), 0.2);
//! assert_eq!(spec.cdf(3.0), 0.6);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use probviz_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 2.5, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(&values, 3);
//! assert_eq!(histogram.counts, vec![4, 2, 4]);
//! ```

pub use self::distribution::{DistributionSpec, Family, ParamError, ParseDistributionError};

pub mod descriptive;
pub mod distribution;
pub mod histogram;
pub mod special;
