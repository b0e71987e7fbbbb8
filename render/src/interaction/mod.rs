//! Interactions
//!
//! Interaction records are built by the caller (an integrator or BSDF) and
//! passed by shared reference into every evaluation; this layer never
//! creates or mutates them.

use crate::geometry::*;
use crate::math::*;
use crate::spectrum::*;

mod surface_interaction;

// Re-export
pub use surface_interaction::*;

/// A generic interaction point, sufficient for querying fields inside a
/// participating medium.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interaction {
    /// Point of interaction.
    pub p: Point3f,

    /// Time when interaction occurred.
    pub time: Float,

    /// Wavelengths sampled for this lane.
    pub wavelengths: Wavelength,
}

impl Interaction {
    /// Create a new interaction.
    ///
    /// * `p`           - Point of interaction.
    /// * `time`        - Time when interaction occurred.
    /// * `wavelengths` - Wavelengths sampled for this lane.
    pub fn new(p: Point3f, time: Float, wavelengths: Wavelength) -> Self {
        Self {
            p,
            time,
            wavelengths,
        }
    }
}
