//! Constant Volume

use render::geometry::*;
use render::interaction::Interaction;
use render::mask::*;
use render::math::*;
use render::properties::Properties;
use render::spectrum::*;
use render::volume::SpatialVolume;
use std::fmt;

/// Implements a field with a constant value inside its bounding box and the
/// outside value (zero) everywhere else.
#[derive(Clone)]
pub struct ConstantVolume {
    /// The volume's identifier.
    id: String,

    /// The field value inside the bounding box.
    value: Float,

    /// The bounding box.
    bbox: Bounds3f,
}

impl ConstantVolume {
    /// Create a new `ConstantVolume`.
    ///
    /// * `id`    - The volume's identifier.
    /// * `value` - The field value inside the bounding box.
    /// * `bbox`  - The bounding box.
    pub fn new(id: &str, value: Float, bbox: Bounds3f) -> Self {
        if value < 0.0 {
            warn!("ConstantVolume '{}' has a negative value {}", id, value);
        }
        Self {
            id: String::from(id),
            value,
            bbox,
        }
    }

    /// Evaluate one lane: the constant inside the bounding box, zero
    /// outside.
    ///
    /// * `p` - The query point.
    fn eval_lane(&self, p: &Point3f) -> Float {
        if self.bbox.contains(p) {
            self.value
        } else {
            0.0
        }
    }
}

impl SpatialVolume for ConstantVolume {
    /// Returns the volume's human-readable identifier.
    fn id(&self) -> &str {
        &self.id
    }

    /// Evaluate the field as a spectral quantity.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval(&self, it: &[Interaction], active: &Mask) -> Vec<UnpolarizedSpectrum> {
        masked_map(it, active, |it| {
            UnpolarizedSpectrum::new(self.eval_lane(&it.p))
        })
    }

    /// Evaluate the field as a scalar quantity.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_1(&self, it: &[Interaction], active: &Mask) -> Vec<Float> {
        masked_map(it, active, |it| self.eval_lane(&it.p))
    }

    /// Evaluate the field as a 3-vector quantity by splatting the scalar
    /// value.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_3(&self, it: &[Interaction], active: &Mask) -> Vec<Vector3f> {
        masked_map(it, active, |it| {
            let v = self.eval_lane(&it.p);
            Vector3f::new(v, v, v)
        })
    }

    /// Evaluate the scalar field and its gradient, which vanishes for a
    /// constant field.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_gradient(&self, it: &[Interaction], active: &Mask) -> Vec<(Float, Vector3f)> {
        masked_map(it, active, |it| (self.eval_lane(&it.p), Vector3f::zero()))
    }

    /// Returns the field's majorant, which is the constant itself.
    fn max_value(&self) -> Float {
        self.value
    }

    /// Returns the bounding box.
    fn bbox(&self) -> Bounds3f {
        self.bbox
    }

    /// Returns the nominal discretization hint for a gridless field.
    fn resolution(&self) -> Vector3i {
        Vector3i::new(1, 1, 1)
    }
}

impl fmt::Display for ConstantVolume {
    /// Formats a diagnostic representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConstantVolume {{ id: {}, value: {} }}",
            self.id, self.value
        )
    }
}

impl From<&Properties> for ConstantVolume {
    /// Create a `ConstantVolume` from the given construction properties.
    ///
    /// * `props` - Construction properties.
    fn from(props: &Properties) -> Self {
        let p_min = props.find_point3f("min", Point3f::zero());
        let p_max = props.find_point3f("max", Point3f::new(1.0, 1.0, 1.0));
        Self::new(
            props.id(),
            props.find_float("value", 1.0),
            Bounds3f::new(p_min, p_max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(p: Point3f) -> Interaction {
        Interaction::new(p, 0.0, Wavelength::new(550.0))
    }

    #[test]
    fn unit_cube_density_two_matches_the_contract() {
        let vol = ConstantVolume::new("fog", 2.0, Bounds3f::UNIT);
        let it = [at(Point3f::new(0.5, 0.5, 0.5)), at(Point3f::new(2.0, 2.0, 2.0))];
        let out = vol.eval_1(&it, &Mask::all(2));
        assert_eq!(out, vec![2.0, 0.0]);
        assert_eq!(vol.max_value(), 2.0);
        assert_eq!(vol.resolution(), Vector3i::new(1, 1, 1));
    }

    #[test]
    fn spectral_and_vector_overloads_splat_the_scalar() {
        let vol = ConstantVolume::new("fog", 2.0, Bounds3f::UNIT);
        let it = [at(Point3f::new(0.25, 0.25, 0.25))];
        assert_eq!(
            vol.eval(&it, &Mask::all(1)),
            vec![UnpolarizedSpectrum::new(2.0)]
        );
        assert_eq!(
            vol.eval_3(&it, &Mask::all(1)),
            vec![Vector3f::new(2.0, 2.0, 2.0)]
        );
    }

    #[test]
    fn gradient_of_a_constant_field_is_zero() {
        let vol = ConstantVolume::new("fog", 2.0, Bounds3f::UNIT);
        let it = [at(Point3f::new(0.5, 0.5, 0.5))];
        let out = vol.eval_gradient(&it, &Mask::all(1));
        assert_eq!(out, vec![(2.0, Vector3f::zero())]);
    }

    #[test]
    fn inactive_lanes_stay_zero() {
        let vol = ConstantVolume::new("fog", 2.0, Bounds3f::UNIT);
        let it = [at(Point3f::new(0.5, 0.5, 0.5)); 2];
        let out = vol.eval_1(&it, &Mask::from(vec![true, false]));
        assert_eq!(out, vec![2.0, 0.0]);
    }
}
