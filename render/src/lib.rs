//! Spectral field evaluation core.
//!
//! The two abstractions that matter here are [`texture::SpectralTexture`]
//! for spatially varying surface quantities and [`volume::SpatialVolume`]
//! for participating-medium fields. Everything else is the plumbing both of
//! them share: batched masked evaluation, interaction records, spectra and
//! the plugin registry.

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod foreign;
pub mod geometry;
pub mod interaction;
pub mod mask;
pub mod math;
pub mod properties;
pub mod registry;
pub mod rng;
pub mod spectrum;
pub mod texture;
pub mod volume;
