//! Checkerboard Texture

use render::geometry::*;
use render::interaction::SurfaceInteraction;
use render::mask::*;
use render::math::*;
use render::properties::Properties;
use render::spectrum::*;
use render::texture::SpectralTexture;
use std::fmt;

/// Implements a procedural checkerboard over the surface parameterization,
/// alternating between two values per integer uv cell.
#[derive(Clone)]
pub struct CheckerboardTexture {
    /// The texture's identifier.
    id: String,

    /// Value of the even cells.
    value0: Float,

    /// Value of the odd cells.
    value1: Float,

    /// Scale applied to uv before the parity lookup.
    uv_scale: Point2f,

    /// Offset applied to uv before the parity lookup.
    uv_offset: Point2f,
}

impl CheckerboardTexture {
    /// Create a new `CheckerboardTexture`.
    ///
    /// * `id`        - The texture's identifier.
    /// * `value0`    - Value of the even cells.
    /// * `value1`    - Value of the odd cells.
    /// * `uv_scale`  - Scale applied to uv before the parity lookup.
    /// * `uv_offset` - Offset applied to uv before the parity lookup.
    pub fn new(
        id: &str,
        value0: Float,
        value1: Float,
        uv_scale: Point2f,
        uv_offset: Point2f,
    ) -> Self {
        Self {
            id: String::from(id),
            value0,
            value1,
            uv_scale,
            uv_offset,
        }
    }

    /// Evaluate one lane by cell parity of the transformed uv coordinates.
    ///
    /// * `si` - The surface interaction.
    fn eval_lane(&self, si: &SurfaceInteraction) -> Float {
        let u = si.uv.x * self.uv_scale.x + self.uv_offset.x;
        let v = si.uv.y * self.uv_scale.y + self.uv_offset.y;
        if (u.floor() as Int + v.floor() as Int) % 2 == 0 {
            self.value0
        } else {
            self.value1
        }
    }
}

impl SpectralTexture for CheckerboardTexture {
    /// Returns the texture's human-readable identifier.
    fn id(&self) -> &str {
        &self.id
    }

    /// Evaluate the texture at the given surface interactions.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval(&self, si: &[SurfaceInteraction], active: &Mask) -> Vec<UnpolarizedSpectrum> {
        masked_map(si, active, |si| UnpolarizedSpectrum::new(self.eval_lane(si)))
    }

    /// Importance-sample the spectral dimension. Both cell values are flat
    /// across the spectrum, so wavelengths are drawn uniformly and the
    /// returned spectrum is the evaluation divided by the uniform density.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `sample` - Canonical uniform samples, one per lane.
    /// * `active` - The activity mask.
    fn sample_spectrum(
        &self,
        si: &[SurfaceInteraction],
        sample: &[Wavelength],
        active: &Mask,
    ) -> Vec<(Wavelength, UnpolarizedSpectrum)> {
        masked_map2(si, sample, active, |si, u| {
            let wl = sample_uniform_wavelength(u);
            let value = UnpolarizedSpectrum::new(self.eval_lane(si)) / uniform_wavelength_pdf();
            (wl, value)
        })
    }

    /// Returns the uniform spectral sampling density.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `active` - The activity mask.
    fn pdf_spectrum(&self, si: &[SurfaceInteraction], active: &Mask) -> Vec<Wavelength> {
        masked_map(si, active, |_| Wavelength::new(uniform_wavelength_pdf()))
    }

    /// Importance-sample a 2-D position. The cell structure carries no
    /// useful guidance for positional sampling, so the canonical sample is
    /// returned unchanged with unit density.
    ///
    /// * `sample` - Canonical uniform samples, one per lane.
    /// * `active` - The activity mask.
    fn sample_position(&self, sample: &[Point2f], active: &Mask) -> Vec<(Point2f, Float)> {
        masked_map(sample, active, |s| (*s, 1.0))
    }

    /// Returns the texture's average value. Even and odd cells tile the
    /// plane in equal measure.
    fn mean(&self) -> Float {
        0.5 * (self.value0 + self.value1)
    }
}

impl fmt::Display for CheckerboardTexture {
    /// Formats a diagnostic representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CheckerboardTexture {{ id: {}, value0: {}, value1: {} }}",
            self.id, self.value0, self.value1
        )
    }
}

impl From<&Properties> for CheckerboardTexture {
    /// Create a `CheckerboardTexture` from the given construction
    /// properties.
    ///
    /// * `props` - Construction properties.
    fn from(props: &Properties) -> Self {
        Self::new(
            props.id(),
            props.find_float("value0", 0.4),
            props.find_float("value1", 0.2),
            Point2f::new(
                props.find_float("uscale", 1.0),
                props.find_float("vscale", 1.0),
            ),
            Point2f::new(
                props.find_float("uoffset", 0.0),
                props.find_float("voffset", 0.0),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use render::rng::RNG;

    fn at_uv(uv: Point2f) -> SurfaceInteraction {
        SurfaceInteraction::new(
            Point3f::zero(),
            0.0,
            Vector3f::new(0.0, 0.0, 1.0),
            Normal3f::new(0.0, 0.0, 1.0),
            uv,
            Wavelength::new(550.0),
        )
    }

    #[test]
    fn cells_alternate_by_uv_parity() {
        let tex = CheckerboardTexture::new(
            "check",
            1.0,
            0.0,
            Point2f::new(1.0, 1.0),
            Point2f::new(0.0, 0.0),
        );
        let si = [
            at_uv(Point2f::new(0.5, 0.5)),
            at_uv(Point2f::new(1.5, 0.5)),
            at_uv(Point2f::new(1.5, 1.5)),
            at_uv(Point2f::new(0.5, 1.5)),
        ];
        let out = tex.eval(&si, &Mask::all(4));
        assert_eq!(out[0], UnpolarizedSpectrum::new(1.0));
        assert_eq!(out[1], UnpolarizedSpectrum::new(0.0));
        assert_eq!(out[2], UnpolarizedSpectrum::new(1.0));
        assert_eq!(out[3], UnpolarizedSpectrum::new(0.0));
    }

    #[test]
    fn negative_cells_keep_alternating() {
        let tex = CheckerboardTexture::new(
            "check",
            1.0,
            0.0,
            Point2f::new(1.0, 1.0),
            Point2f::new(0.0, 0.0),
        );
        let si = [
            at_uv(Point2f::new(-0.5, 0.5)),
            at_uv(Point2f::new(-1.5, 0.5)),
        ];
        let out = tex.eval(&si, &Mask::all(2));
        assert_ne!(out[0], out[1]);
    }

    #[test]
    fn mean_matches_monte_carlo_average_over_whole_cells() {
        // A (2, 2) uv scale tiles the unit square with four cells, two of
        // each parity.
        let tex = CheckerboardTexture::new(
            "check",
            0.8,
            0.2,
            Point2f::new(2.0, 2.0),
            Point2f::new(0.0, 0.0),
        );
        let mut rng = RNG::new(3);
        let si: Vec<SurfaceInteraction> = (0..4096)
            .map(|_| at_uv(Point2f::new(rng.uniform_float(), rng.uniform_float())))
            .collect();
        let out = tex.eval(&si, &Mask::all(si.len()));
        let avg: Float =
            out.iter().map(|s| s.average()).sum::<Float>() / out.len() as Float;
        assert!(approx_eq!(Float, avg, tex.mean(), epsilon = 2e-2));
    }

    #[test]
    fn inactive_lanes_stay_zero() {
        let tex = CheckerboardTexture::new(
            "check",
            1.0,
            0.5,
            Point2f::new(1.0, 1.0),
            Point2f::new(0.0, 0.0),
        );
        let si = [at_uv(Point2f::new(0.5, 0.5)), at_uv(Point2f::new(0.5, 0.5))];
        let out = tex.eval(&si, &Mask::from(vec![false, true]));
        assert_eq!(out[0], UnpolarizedSpectrum::ZERO);
        assert_eq!(out[1], UnpolarizedSpectrum::new(1.0));
    }
}
