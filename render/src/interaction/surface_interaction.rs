//! Surface Interactions

use super::Interaction;
use crate::geometry::*;
use crate::math::*;
use crate::spectrum::*;

/// SurfaceInteraction describes a point on a surface where a spatially
/// varying quantity is queried.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceInteraction {
    /// Point of interaction.
    pub p: Point3f,

    /// Time when interaction occurred.
    pub time: Float,

    /// The negative ray direction (outgoing direction used when computing
    /// lighting at points).
    pub wo: Vector3f,

    /// Geometric surface normal at the point `p`.
    pub n: Normal3f,

    /// The uv coordinates from surface parametrization.
    pub uv: Point2f,

    /// Shading frame used for perturbed values.
    pub shading: Frame,

    /// Wavelengths sampled for this lane.
    pub wavelengths: Wavelength,
}

impl SurfaceInteraction {
    /// Create a new surface interaction.
    ///
    /// * `p`           - Point of interaction.
    /// * `time`        - Time when interaction occurred.
    /// * `wo`          - The negative ray direction.
    /// * `n`           - Geometric surface normal at the point `p`.
    /// * `uv`          - The uv coordinates from surface parametrization.
    /// * `wavelengths` - Wavelengths sampled for this lane.
    pub fn new(
        p: Point3f,
        time: Float,
        wo: Vector3f,
        n: Normal3f,
        uv: Point2f,
        wavelengths: Wavelength,
    ) -> Self {
        Self {
            p,
            time,
            wo,
            n,
            uv,
            shading: Frame::from_normal(n),
            wavelengths,
        }
    }

    /// Returns the generic interaction record for this surface point.
    pub fn as_interaction(&self) -> Interaction {
        Interaction::new(self.p, self.time, self.wavelengths)
    }
}
