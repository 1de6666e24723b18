//! Random variate generation for the probviz visualizers.
//!
//! All randomness enters through the [`UniformSource`] trait. Any [`rand::RngCore`]
//! implements it, and [`SampleSeed::source`] builds a seeded PCG generator
//! so sample-dependent results can be replayed exactly.
//!
//! - [`sampler`]: Box-Muller normals, inverse-transform exponentials, uniforms,
//!   Knuth Poisson draws and discrete uniforms, unified by the [`Sampler`] trait
//! - [`clt`]: [`generate_samples`], which draws groups and their means

pub use self::{
    clt::{
        CltSamples, MAX_TOTAL_DRAWS, SampleShapeError, generate_samples, theoretical_standard_error,
    },
    sampler::Sampler,
    source::{ParseSeedError, SampleSeed, SeededSource, UniformSource},
};

pub mod clt;
pub mod sampler;
mod source;
