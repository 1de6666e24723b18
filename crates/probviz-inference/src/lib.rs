//! Confidence intervals and one-sample z-tests on top of the sampling engine.
//!
//! [`run_coverage_experiment`] shows how often `level` confidence intervals
//! built from simulated samples contain the true mean. [`ZTest`] evaluates a
//! hypothesis about a mean with known population standard deviation and lays
//! out the regions where it would be rejected.

use probviz_sampling::SampleShapeError;
use probviz_stats::special::ProbabilityOutOfRange;

pub use self::{
    coverage::{CoverageExperiment, CoverageReport, Interval, run_coverage_experiment, simulate_coverage},
    level::{ConfidenceLevel, Decision, LevelError, Significance, Tail, p_value},
    ztest::{DisplayDomain, Region, TestResult, ZTest, ZTestReport},
};

mod coverage;
mod level;
mod ztest;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InferenceError {
    #[display("{name} must be finite, got {value}")]
    #[from(ignore)]
    NonFinite { name: &'static str, value: f64 },
    #[display("{name} must be positive, got {value}")]
    #[from(ignore)]
    NonPositive { name: &'static str, value: f64 },
    #[display("invalid level: {_0}")]
    Level(#[error(not(source))] LevelError),
    #[display("cannot compute critical value: {_0}")]
    Quantile(#[error(not(source))] ProbabilityOutOfRange),
    #[display("invalid sample shape: {_0}")]
    Shape(#[error(not(source))] SampleShapeError),
}
