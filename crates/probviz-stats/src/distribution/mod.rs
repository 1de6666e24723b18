//! Closed-form distribution functions and the parameterized [`DistributionSpec`].
//!
//! The free functions are pure and deterministic; they assume parameters that
//! already satisfy the family's domain (see [`DistributionSpec::validate`]):
//!
//! - [`normal_pdf`], [`normal_cdf`] (erf based), [`standard_normal_pdf`], [`standard_normal_cdf`]
//! - [`exponential_pdf`], [`exponential_cdf`]
//! - [`uniform_pdf`], [`uniform_cdf`]
//! - [`poisson_pmf`] (log space), [`poisson_cdf`]
//! - [`uniform_discrete_pmf`], [`uniform_discrete_cdf`]
//!
//! [`DistributionSpec`] dispatches to them by family.

pub use self::{continuous::*, discrete::*, parse::*, spec::*};

mod continuous;
mod discrete;
mod parse;
mod spec;
