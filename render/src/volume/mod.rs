//! Spatial Volumes

use crate::geometry::*;
use crate::interaction::Interaction;
use crate::mask::Mask;
use crate::math::*;
use crate::spectrum::*;
use std::fmt;
use std::sync::Arc;

/// Interface for scalar, vector or spectral fields defined over a bounded
/// 3-D region, queried by ray-marching and transmittance-estimation code
/// inside a participating medium.
///
/// Batching and masking follow the same rules as `SpectralTexture`: one
/// record per lane, inactive lanes yield zero and stay isolated. Outside
/// [`bbox`](SpatialVolume::bbox) every evaluation returns the field's
/// outside value, which is zero for all implementations in this workspace.
pub trait SpatialVolume: fmt::Display {
    /// Returns the volume's human-readable identifier, set at construction
    /// and used for diagnostics and scene lookup.
    fn id(&self) -> &str;

    /// Evaluate the field as a spectral quantity at the given interaction
    /// points.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval(&self, it: &[Interaction], active: &Mask) -> Vec<UnpolarizedSpectrum>;

    /// Evaluate the field as a scalar quantity at the given interaction
    /// points.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_1(&self, it: &[Interaction], active: &Mask) -> Vec<Float>;

    /// Evaluate the field as a 3-vector quantity at the given interaction
    /// points.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_3(&self, it: &[Interaction], active: &Mask) -> Vec<Vector3f>;

    /// Evaluate the scalar field together with its spatial gradient at the
    /// given interaction points. The gradient's sign convention matches the
    /// returned value: it points towards increasing field values.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_gradient(&self, it: &[Interaction], active: &Mask) -> Vec<(Float, Vector3f)>;

    /// Returns an upper bound of the field's magnitude over its whole
    /// domain, used as a majorant for free-flight sampling. Implementations
    /// must never understate the true maximum.
    fn max_value(&self) -> Float;

    /// Returns the axis-aligned region outside of which every evaluation
    /// returns the field's outside value.
    fn bbox(&self) -> Bounds3f;

    /// Returns a discretization hint (voxel grid dimensions) for callers
    /// choosing ray-marching step sizes. Implementations without an
    /// intrinsic grid report a nominal value, never an undefined one.
    fn resolution(&self) -> Vector3i;
}

impl fmt::Debug for dyn SpatialVolume + Send + Sync {
    /// Forwards to the `Display` implementation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Atomic reference counted `SpatialVolume`.
pub type ArcSpatialVolume = Arc<dyn SpatialVolume + Send + Sync>;
