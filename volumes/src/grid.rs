//! Grid Volume

use render::geometry::*;
use render::interaction::Interaction;
use render::mask::*;
use render::math::*;
use render::properties::Properties;
use render::spectrum::*;
use render::volume::SpatialVolume;
use std::fmt;

/// Implements a field stored at a regular 3D grid of positions. The samples
/// are interpolated trilinearly to compute values between the sample
/// points, and the stored maximum doubles as the majorant for free-flight
/// sampling.
#[derive(Clone, Debug)]
pub struct GridVolume {
    /// The volume's identifier.
    id: String,

    /// Grid size in x-direction.
    nx: usize,

    /// Grid size in y-direction.
    ny: usize,

    /// Grid size in z-direction.
    nz: usize,

    /// Field values at the grid positions.
    data: Vec<Float>,

    /// The bounding box the grid is stretched over.
    bbox: Bounds3f,

    /// Upper bound of the field's magnitude. The interpolant is a convex
    /// combination of grid samples, so the largest sample magnitude bounds
    /// it.
    max_value: Float,
}

impl GridVolume {
    /// Create a new `GridVolume`. The data layout is x-major: the value at
    /// grid position (x, y, z) lives at index `(z * ny + y) * nx + x`.
    ///
    /// * `id`   - The volume's identifier.
    /// * `nx`   - Grid size in x-direction.
    /// * `ny`   - Grid size in y-direction.
    /// * `nz`   - Grid size in z-direction.
    /// * `data` - Field values at the grid positions.
    /// * `bbox` - The bounding box the grid is stretched over.
    pub fn new(
        id: &str,
        nx: usize,
        ny: usize,
        nz: usize,
        data: Vec<Float>,
        bbox: Bounds3f,
    ) -> Result<Self, String> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(format!(
                "GridVolume '{}' has a degenerate resolution {}x{}x{}",
                id, nx, ny, nz
            ));
        }
        if data.len() != nx * ny * nz {
            return Err(format!(
                "GridVolume '{}' expects {} values for a {}x{}x{} grid but got {}",
                id,
                nx * ny * nz,
                nx,
                ny,
                nz,
                data.len()
            ));
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(format!("GridVolume '{}' contains non-finite values", id));
        }
        if data.iter().any(|v| *v < 0.0) {
            warn!("GridVolume '{}' contains negative values", id);
        }

        let max_value = data.iter().fold(0.0, |a, &v| max(a, abs(v)));
        Ok(Self {
            id: String::from(id),
            nx,
            ny,
            nz,
            data,
            bbox,
            max_value,
        })
    }

    /// Create a `GridVolume` from the given construction properties.
    ///
    /// * `props` - Construction properties.
    pub fn from_props(props: &Properties) -> Result<Self, String> {
        let p_min = props.find_point3f("min", Point3f::zero());
        let p_max = props.find_point3f("max", Point3f::new(1.0, 1.0, 1.0));
        Self::new(
            props.id(),
            props.find_int("nx", 0) as usize,
            props.find_int("ny", 0) as usize,
            props.find_int("nz", 0) as usize,
            props.find_float_list("data", Vec::new()),
            Bounds3f::new(p_min, p_max),
        )
    }

    /// Returns the value at the given integer sample position, or zero for
    /// positions beyond the grid.
    ///
    /// * `p` - Sample position.
    fn d(&self, p: &Point3i) -> Float {
        let sample_bounds = Bounds3i::new(
            Point3i::zero(),
            Point3i::new(self.nx as Int, self.ny as Int, self.nz as Int),
        );
        if !sample_bounds.contains_exclusive(p) {
            0.0
        } else {
            let i = (p.z * self.ny as Int + p.y) * self.nx as Int + p.x;
            self.data[i as usize]
        }
    }

    /// Reconstruct the field at the given position in the grid's local
    /// [0, 1]^3 coordinates by trilinear interpolation.
    ///
    /// * `p` - Local position.
    fn density(&self, p: &Point3f) -> Float {
        // Compute voxel coordinates and offsets for `p`.
        let p_samples = Point3f::new(
            p.x * self.nx as Float - 0.5,
            p.y * self.ny as Float - 0.5,
            p.z * self.nz as Float - 0.5,
        );
        let pi = Point3i::from(p_samples);
        let d = p_samples - Point3f::from(pi);

        // Trilinearly interpolate density values to compute local density.
        let d00 = lerp(d.x, self.d(&pi), self.d(&(pi + Vector3i::new(1, 0, 0))));
        let d10 = lerp(
            d.x,
            self.d(&(pi + Vector3i::new(0, 1, 0))),
            self.d(&(pi + Vector3i::new(1, 1, 0))),
        );
        let d01 = lerp(
            d.x,
            self.d(&(pi + Vector3i::new(0, 0, 1))),
            self.d(&(pi + Vector3i::new(1, 0, 1))),
        );
        let d11 = lerp(
            d.x,
            self.d(&(pi + Vector3i::new(0, 1, 1))),
            self.d(&(pi + Vector3i::new(1, 1, 1))),
        );
        let d0 = lerp(d.y, d00, d10);
        let d1 = lerp(d.y, d01, d11);
        lerp(d.z, d0, d1)
    }

    /// Reconstruct the field and its gradient in local coordinates. The
    /// partial derivatives of the trilinear interpolant come from the
    /// corner differences along each axis.
    ///
    /// * `p` - Local position.
    fn density_gradient(&self, p: &Point3f) -> (Float, Vector3f) {
        let p_samples = Point3f::new(
            p.x * self.nx as Float - 0.5,
            p.y * self.ny as Float - 0.5,
            p.z * self.nz as Float - 0.5,
        );
        let pi = Point3i::from(p_samples);
        let d = p_samples - Point3f::from(pi);

        // Fetch the eight surrounding samples.
        let c000 = self.d(&pi);
        let c100 = self.d(&(pi + Vector3i::new(1, 0, 0)));
        let c010 = self.d(&(pi + Vector3i::new(0, 1, 0)));
        let c110 = self.d(&(pi + Vector3i::new(1, 1, 0)));
        let c001 = self.d(&(pi + Vector3i::new(0, 0, 1)));
        let c101 = self.d(&(pi + Vector3i::new(1, 0, 1)));
        let c011 = self.d(&(pi + Vector3i::new(0, 1, 1)));
        let c111 = self.d(&(pi + Vector3i::new(1, 1, 1)));

        let value = lerp(
            d.z,
            lerp(d.y, lerp(d.x, c000, c100), lerp(d.x, c010, c110)),
            lerp(d.y, lerp(d.x, c001, c101), lerp(d.x, c011, c111)),
        );

        // Per-axis partials in sample space.
        let gx = lerp(
            d.z,
            lerp(d.y, c100 - c000, c110 - c010),
            lerp(d.y, c101 - c001, c111 - c011),
        );
        let gy = lerp(
            d.z,
            lerp(d.x, c010, c110) - lerp(d.x, c000, c100),
            lerp(d.x, c011, c111) - lerp(d.x, c001, c101),
        );
        let gz = lerp(d.y, lerp(d.x, c001, c101), lerp(d.x, c011, c111))
            - lerp(d.y, lerp(d.x, c000, c100), lerp(d.x, c010, c110));

        // Chain through the local-to-sample and world-to-local scalings.
        let diag = self.bbox.diagonal();
        let gradient = Vector3f::new(
            gx * self.nx as Float / diag.x,
            gy * self.ny as Float / diag.y,
            gz * self.nz as Float / diag.z,
        );
        (value, gradient)
    }

    /// Evaluate one lane: the interpolated field inside the bounding box,
    /// zero outside.
    ///
    /// * `p` - The query point.
    fn eval_lane(&self, p: &Point3f) -> Float {
        if !self.bbox.contains(p) {
            return 0.0;
        }
        let o = self.bbox.offset(p);
        self.density(&Point3f::new(o.x, o.y, o.z))
    }

    /// Evaluate one lane's value and world-space gradient.
    ///
    /// * `p` - The query point.
    fn eval_gradient_lane(&self, p: &Point3f) -> (Float, Vector3f) {
        if !self.bbox.contains(p) {
            return (0.0, Vector3f::zero());
        }
        let o = self.bbox.offset(p);
        self.density_gradient(&Point3f::new(o.x, o.y, o.z))
    }
}

impl SpatialVolume for GridVolume {
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

    /// Evaluate the scalar field together with its world-space gradient.
    ///
    /// * `it`     - Interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval_gradient(&self, it: &[Interaction], active: &Mask) -> Vec<(Float, Vector3f)> {
        masked_map(it, active, |it| self.eval_gradient_lane(&it.p))
    }

    /// Returns the field's majorant.
    fn max_value(&self) -> Float {
        self.max_value
    }

    /// Returns the bounding box.
    fn bbox(&self) -> Bounds3f {
        self.bbox
    }

    /// Returns the grid dimensions.
    fn resolution(&self) -> Vector3i {
        Vector3i::new(self.nx as Int, self.ny as Int, self.nz as Int)
    }
}

impl fmt::Display for GridVolume {
    /// Formats a diagnostic representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridVolume {{ id: {}, resolution: {}x{}x{}, max: {} }}",
            self.id, self.nx, self.ny, self.nz, self.max_value
        )
    }
}
