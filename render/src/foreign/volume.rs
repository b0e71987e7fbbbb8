//! Foreign Volume Trampoline

use super::require;
use crate::geometry::*;
use crate::interaction::Interaction;
use crate::mask::Mask;
use crate::math::*;
use crate::spectrum::*;
use crate::volume::SpatialVolume;
use std::fmt;
use std::sync::Arc;

/// Callback evaluating the field as a spectral quantity.
pub type VolumeEvalFn =
    Arc<dyn Fn(&[Interaction], &Mask) -> Vec<UnpolarizedSpectrum> + Send + Sync>;

/// Callback evaluating the field as a scalar quantity.
pub type VolumeEval1Fn = Arc<dyn Fn(&[Interaction], &Mask) -> Vec<Float> + Send + Sync>;

/// Callback evaluating the field as a 3-vector quantity.
pub type VolumeEval3Fn = Arc<dyn Fn(&[Interaction], &Mask) -> Vec<Vector3f> + Send + Sync>;

/// Callback evaluating the scalar field together with its gradient.
pub type VolumeEvalGradientFn =
    Arc<dyn Fn(&[Interaction], &Mask) -> Vec<(Float, Vector3f)> + Send + Sync>;

/// Callback returning the field's majorant.
pub type VolumeMaxValueFn = Arc<dyn Fn() -> Float + Send + Sync>;

/// Callback returning the field's bounding box.
pub type VolumeBboxFn = Arc<dyn Fn() -> Bounds3f + Send + Sync>;

/// Callback returning the discretization hint.
pub type VolumeResolutionFn = Arc<dyn Fn() -> Vector3i + Send + Sync>;

/// Callback returning the diagnostic representation.
pub type VolumeToStringFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Collects the callbacks of a foreign volume implementation. Every
/// operation of the `SpatialVolume` contract is mandatory; `build` fails
/// with a diagnostic naming the first missing one.
pub struct ForeignVolumeBuilder {
    id: String,
    eval: Option<VolumeEvalFn>,
    eval_1: Option<VolumeEval1Fn>,
    eval_3: Option<VolumeEval3Fn>,
    eval_gradient: Option<VolumeEvalGradientFn>,
    max_value: Option<VolumeMaxValueFn>,
    bbox: Option<VolumeBboxFn>,
    resolution: Option<VolumeResolutionFn>,
    to_string: Option<VolumeToStringFn>,
}

impl ForeignVolumeBuilder {
    /// Create a builder with no operations supplied.
    ///
    /// * `id` - The foreign volume's identifier.
    pub fn new(id: &str) -> Self {
        Self {
            id: String::from(id),
            eval: None,
            eval_1: None,
            eval_3: None,
            eval_gradient: None,
            max_value: None,
            bbox: None,
            resolution: None,
            to_string: None,
        }
    }

    /// Supply the `eval` operation.
    ///
    /// * `f` - The callback.
    pub fn with_eval<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Interaction], &Mask) -> Vec<UnpolarizedSpectrum> + Send + Sync + 'static,
    {
        self.eval = Some(Arc::new(f));
        self
    }

    /// Supply the `eval_1` operation.
    ///
    /// * `f` - The callback.
    pub fn with_eval_1<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Interaction], &Mask) -> Vec<Float> + Send + Sync + 'static,
    {
        self.eval_1 = Some(Arc::new(f));
        self
    }

    /// Supply the `eval_3` operation.
    ///
    /// * `f` - The callback.
    pub fn with_eval_3<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Interaction], &Mask) -> Vec<Vector3f> + Send + Sync + 'static,
    {
        self.eval_3 = Some(Arc::new(f));
        self
    }

    /// Supply the `eval_gradient` operation.
    ///
    /// * `f` - The callback.
    pub fn with_eval_gradient<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Interaction], &Mask) -> Vec<(Float, Vector3f)> + Send + Sync + 'static,
    {
        self.eval_gradient = Some(Arc::new(f));
        self
    }

    /// Supply the `max_value` operation.
    ///
    /// * `f` - The callback.
    pub fn with_max_value<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Float + Send + Sync + 'static,
    {
        self.max_value = Some(Arc::new(f));
        self
    }

    /// Supply the `bbox` operation.
    ///
    /// * `f` - The callback.
    pub fn with_bbox<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Bounds3f + Send + Sync + 'static,
    {
        self.bbox = Some(Arc::new(f));
        self
    }

    /// Supply the `resolution` operation.
    ///
    /// * `f` - The callback.
    pub fn with_resolution<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Vector3i + Send + Sync + 'static,
    {
        self.resolution = Some(Arc::new(f));
        self
    }

    /// Supply the `to_string` operation.
    ///
    /// * `f` - The callback.
    pub fn with_to_string<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.to_string = Some(Arc::new(f));
        self
    }

    /// Validate that every mandatory operation was supplied and produce the
    /// trampoline. Fails with a diagnostic naming the first missing
    /// operation.
    pub fn build(self) -> Result<ForeignVolume, String> {
        let id = self.id;
        Ok(ForeignVolume {
            eval: require(self.eval, "volume", &id, "eval")?,
            eval_1: require(self.eval_1, "volume", &id, "eval_1")?,
            eval_3: require(self.eval_3, "volume", &id, "eval_3")?,
            eval_gradient: require(self.eval_gradient, "volume", &id, "eval_gradient")?,
            max_value: require(self.max_value, "volume", &id, "max_value")?,
            bbox: require(self.bbox, "volume", &id, "bbox")?,
            resolution: require(self.resolution, "volume", &id, "resolution")?,
            to_string: require(self.to_string, "volume", &id, "to_string")?,
            id,
        })
    }
}

/// Trampoline adapting a foreign implementation to the `SpatialVolume`
/// contract. Each call is forwarded with its original arguments and
/// activity mask; results are propagated unchanged.
pub struct ForeignVolume {
    /// The foreign volume's identifier.
    id: String,

    eval: VolumeEvalFn,
    eval_1: VolumeEval1Fn,
    eval_3: VolumeEval3Fn,
    eval_gradient: VolumeEvalGradientFn,
    max_value: VolumeMaxValueFn,
    bbox: VolumeBboxFn,
    resolution: VolumeResolutionFn,
    to_string: VolumeToStringFn,
}

impl SpatialVolume for ForeignVolume {
    /// Returns the volume's human-readable identifier.
    fn id(&self) -> &str {
        &self.id
    }

    /// Forwards to the foreign `eval` operation.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval(&self, it: &[Interaction], active: &Mask) -> Vec<UnpolarizedSpectrum> {
        (self.eval)(it, active)
    }

    /// Forwards to the foreign `eval_1` operation.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_1(&self, it: &[Interaction], active: &Mask) -> Vec<Float> {
        (self.eval_1)(it, active)
    }

    /// Forwards to the foreign `eval_3` operation.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_3(&self, it: &[Interaction], active: &Mask) -> Vec<Vector3f> {
        (self.eval_3)(it, active)
    }

    /// Forwards to the foreign `eval_gradient` operation.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_gradient(&self, it: &[Interaction], active: &Mask) -> Vec<(Float, Vector3f)> {
        (self.eval_gradient)(it, active)
    }

    /// Forwards to the foreign `max_value` operation.
    fn max_value(&self) -> Float {
        (self.max_value)()
    }

    /// Forwards to the foreign `bbox` operation.
    fn bbox(&self) -> Bounds3f {
        (self.bbox)()
    }

    /// Forwards to the foreign `resolution` operation.
    fn resolution(&self) -> Vector3i {
        (self.resolution)()
    }
}

impl fmt::Display for ForeignVolume {
    /// Forwards to the foreign `to_string` operation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (self.to_string)())
    }
}

impl fmt::Debug for ForeignVolume {
    /// Forwards to the `Display` implementation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::masked_map;

    fn complete_builder() -> ForeignVolumeBuilder {
        ForeignVolumeBuilder::new("scripted")
            .with_eval(|it, active| masked_map(it, active, |_| UnpolarizedSpectrum::new(2.0)))
            .with_eval_1(|it, active| masked_map(it, active, |_| 2.0))
            .with_eval_3(|it, active| masked_map(it, active, |_| Vector3f::new(2.0, 2.0, 2.0)))
            .with_eval_gradient(|it, active| masked_map(it, active, |_| (2.0, Vector3f::zero())))
            .with_max_value(|| 2.0)
            .with_bbox(Bounds3f::default)
            .with_resolution(|| Vector3i::new(1, 1, 1))
            .with_to_string(|| String::from("ScriptedVolume"))
    }

    #[test]
    fn complete_foreign_volume_builds_and_forwards() {
        let vol = complete_builder().build().unwrap();
        assert_eq!(vol.id(), "scripted");
        assert_eq!(vol.max_value(), 2.0);
        assert_eq!(vol.resolution(), Vector3i::new(1, 1, 1));
        assert_eq!(vol.to_string(), "ScriptedVolume");

        let it = [Interaction::default(); 2];
        assert_eq!(vol.eval_1(&it, &Mask::all(2)), vec![2.0, 2.0]);
    }

    #[test]
    fn trampoline_preserves_the_activity_mask() {
        let vol = complete_builder().build().unwrap();
        let it = [Interaction::default(); 2];
        let out = vol.eval_1(&it, &Mask::from(vec![false, true]));
        assert_eq!(out, vec![0.0, 2.0]);
    }

    #[test]
    fn missing_resolution_fails_construction_naming_the_operation() {
        let err = ForeignVolumeBuilder::new("scripted")
            .with_eval(|it, active| masked_map(it, active, |_| UnpolarizedSpectrum::ZERO))
            .with_eval_1(|it, active| masked_map(it, active, |_| 0.0))
            .with_eval_3(|it, active| masked_map(it, active, |_| Vector3f::zero()))
            .with_eval_gradient(|it, active| masked_map(it, active, |_| (0.0, Vector3f::zero())))
            .with_max_value(|| 0.0)
            .with_bbox(Bounds3f::default)
            .with_to_string(|| String::from("ScriptedVolume"))
            .build()
            .unwrap_err();
        assert!(err.contains("'resolution'"));
        assert!(err.contains("scripted"));
    }
}
