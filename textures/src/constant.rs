//! Constant Texture

use render::geometry::*;
use render::interaction::SurfaceInteraction;
use render::mask::*;
use render::math::*;
use render::properties::Properties;
use render::spectrum::*;
use render::texture::SpectralTexture;
use std::fmt;

/// Implements a texture that returns the same value everywhere.
#[derive(Clone)]
pub struct ConstantTexture {
    /// The texture's identifier.
    id: String,

    /// The texture value.
    value: Float,
}

impl ConstantTexture {
    /// Create a new `ConstantTexture`.
    ///
    /// * `id`    - The texture's identifier.
    /// * `value` - The texture value.
    pub fn new(id: &str, value: Float) -> Self {
        if value < 0.0 {
            warn!("ConstantTexture '{}' has a negative value {}", id, value);
        }
        Self {
            id: String::from(id),
            value,
        }
    }
}

impl SpectralTexture for ConstantTexture {
    /// Returns the texture's human-readable identifier.
    fn id(&self) -> &str {
        &self.id
    }

    /// Evaluate the texture at the given surface interactions.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval(&self, si: &[SurfaceInteraction], active: &Mask) -> Vec<UnpolarizedSpectrum> {
        masked_map(si, active, |_| UnpolarizedSpectrum::new(self.value))
    }

    /// Importance-sample the spectral dimension. The value has no spectral
    /// variation, so wavelengths are drawn uniformly over the domain and
    /// the returned spectrum is the evaluation divided by the uniform
    /// density.
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
        masked_map2(si, sample, active, |_, u| {
            let wl = sample_uniform_wavelength(u);
            let value = UnpolarizedSpectrum::new(self.value) / uniform_wavelength_pdf();
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

    /// Importance-sample a 2-D position. The value has no spatial
    /// variation, so the canonical sample is returned unchanged with unit
    /// density.
    ///
    /// * `sample` - Canonical uniform samples, one per lane.
    /// * `active` - The activity mask.
    fn sample_position(&self, sample: &[Point2f], active: &Mask) -> Vec<(Point2f, Float)> {
        masked_map(sample, active, |s| (*s, 1.0))
    }

    /// Returns the texture's average value, which is the constant itself.
    fn mean(&self) -> Float {
        self.value
    }
}

impl fmt::Display for ConstantTexture {
    /// Formats a diagnostic representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConstantTexture {{ id: {}, value: {} }}",
            self.id, self.value
        )
    }
}

impl From<&Properties> for ConstantTexture {
    /// Create a `ConstantTexture` from the given construction properties.
    ///
    /// * `props` - Construction properties.
    fn from(props: &Properties) -> Self {
        Self::new(props.id(), props.find_float("value", 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use render::rng::RNG;

    fn interactions(n: usize) -> Vec<SurfaceInteraction> {
        let mut rng = RNG::new(1);
        (0..n)
            .map(|_| {
                SurfaceInteraction::new(
                    Point3f::new(
                        rng.uniform_float(),
                        rng.uniform_float(),
                        rng.uniform_float(),
                    ),
                    0.0,
                    Vector3f::new(0.0, 0.0, 1.0),
                    Normal3f::new(0.0, 0.0, 1.0),
                    Point2f::new(rng.uniform_float(), rng.uniform_float()),
                    sample_uniform_wavelength(&sample_shifted(rng.uniform_float())),
                )
            })
            .collect()
    }

    #[test]
    fn eval_returns_the_constant_everywhere() {
        let tex = ConstantTexture::new("half", 0.5);
        let si = interactions(8);
        let out = tex.eval(&si, &Mask::all(8));
        assert_eq!(out, vec![UnpolarizedSpectrum::new(0.5); 8]);
        assert_eq!(tex.mean(), 0.5);
    }

    #[test]
    fn pdf_is_uniform_and_integrates_to_one() {
        let tex = ConstantTexture::new("half", 0.5);
        let si = interactions(4);
        let pdf = tex.pdf_spectrum(&si, &Mask::all(4));
        for lane in pdf {
            for i in 0..SPECTRUM_SAMPLES {
                assert!(approx_eq!(Float, lane[i] * LAMBDA_RANGE, 1.0, ulps = 2));
            }
        }
    }

    #[test]
    fn spectral_samples_at_domain_edges_hit_the_boundaries() {
        let tex = ConstantTexture::new("half", 0.5);
        let si = interactions(2);
        let samples = [Wavelength::new(0.0), Wavelength::new(1.0)];
        let out = tex.sample_spectrum(&si, &samples, &Mask::all(2));
        for i in 0..SPECTRUM_SAMPLES {
            assert_eq!(out[0].0[i], LAMBDA_MIN);
            assert_eq!(out[1].0[i], LAMBDA_MAX);
        }
    }

    #[test]
    fn sampled_value_is_the_evaluation_divided_by_the_pdf() {
        let tex = ConstantTexture::new("half", 0.5);
        let si = interactions(1);
        let samples = [Wavelength::new(0.5)];
        let out = tex.sample_spectrum(&si, &samples, &Mask::all(1));
        let expected = 0.5 / uniform_wavelength_pdf();
        for i in 0..SPECTRUM_SAMPLES {
            assert!(approx_eq!(Float, out[0].1[i], expected, ulps = 2));
        }
    }

    #[test]
    fn mean_matches_monte_carlo_average_of_eval() {
        let tex = ConstantTexture::new("half", 0.5);
        let si = interactions(256);
        let out = tex.eval(&si, &Mask::all(256));
        let avg: Float =
            out.iter().map(|s| s.average()).sum::<Float>() / out.len() as Float;
        assert!(approx_eq!(Float, avg, tex.mean(), epsilon = 1e-4));
    }

    #[test]
    fn active_lanes_are_bit_identical_with_and_without_inactive_neighbours() {
        let tex = ConstantTexture::new("half", 0.5);
        let si = interactions(4);
        let active = Mask::from(vec![true, false, true, false]);
        let full = tex.eval(&si, &active);

        let reduced_si = vec![si[0], si[2]];
        let reduced = tex.eval(&reduced_si, &Mask::all(2));
        assert_eq!(full[0], reduced[0]);
        assert_eq!(full[2], reduced[1]);
        assert_eq!(full[1], UnpolarizedSpectrum::ZERO);
        assert_eq!(full[3], UnpolarizedSpectrum::ZERO);
    }

    #[test]
    fn sample_position_is_the_identity_with_unit_density() {
        let tex = ConstantTexture::new("half", 0.5);
        let samples = [Point2f::new(0.25, 0.75)];
        let out = tex.sample_position(&samples, &Mask::all(1));
        assert_eq!(out[0], (Point2f::new(0.25, 0.75), 1.0));
    }
}
