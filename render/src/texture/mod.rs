//! Spectral Textures

use crate::geometry::*;
use crate::interaction::SurfaceInteraction;
use crate::mask::Mask;
use crate::math::*;
use crate::spectrum::*;
use std::fmt;
use std::sync::Arc;

/// Interface for spatially varying spectral quantities on surfaces, such as
/// reflectance or emission.
///
/// Every evaluation is batched: inputs carry one record per lane and the
/// `active` mask gates which lanes are live. Implementations must return one
/// output per lane, fill inactive lanes with the output type's zero value
/// and never let an inactive lane influence an active one. Evaluations must
/// not panic for in-batch inputs; out-of-domain queries degrade to zero.
///
/// All query methods take `&self` and are invoked concurrently from many
/// rendering worker threads; implementations must not block and must finish
/// any data loading before they are handed to rendering code.
pub trait SpectralTexture: fmt::Display {
    /// Returns the texture's human-readable identifier, set at construction
    /// and used for diagnostics and scene lookup.
    fn id(&self) -> &str;

    /// Evaluate the texture at the given surface interactions for the
    /// wavelengths each interaction carries.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval(&self, si: &[SurfaceInteraction], active: &Mask) -> Vec<UnpolarizedSpectrum>;

    /// Importance-sample the spectral dimension at the given surface
    /// interactions. Returns the sampled wavelengths together with the
    /// evaluation divided by the sampling density, consistent with
    /// `pdf_spectrum`.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `sample` - Canonical uniform samples in [0, 1], one per lane.
    /// * `active` - The activity mask.
    fn sample_spectrum(
        &self,
        si: &[SurfaceInteraction],
        sample: &[Wavelength],
        active: &Mask,
    ) -> Vec<(Wavelength, UnpolarizedSpectrum)>;

    /// Returns the sampling density of `sample_spectrum`, evaluated at the
    /// wavelengths carried by each interaction. For every spatial point the
    /// texture is defined on, the density integrates to 1 over the
    /// wavelength domain.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `active` - The activity mask.
    fn pdf_spectrum(&self, si: &[SurfaceInteraction], active: &Mask) -> Vec<Wavelength>;

    /// Importance-sample a 2-D position in the texture's parameterization.
    /// Returns the sampled position and its density.
    ///
    /// * `sample` - Canonical uniform samples in [0, 1)^2, one per lane.
    /// * `active` - The activity mask.
    fn sample_position(&self, sample: &[Point2f], active: &Mask) -> Vec<(Point2f, Float)>;

    /// Returns the texture's average value over its domain. This is a
    /// precomputed or closed-form quantity used to weigh textures against
    /// each other without per-sample cost.
    fn mean(&self) -> Float;
}

impl fmt::Debug for dyn SpectralTexture + Send + Sync {
    /// Forwards to the `Display` implementation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Atomic reference counted `SpectralTexture`.
pub type ArcSpectralTexture = Arc<dyn SpectralTexture + Send + Sync>;
