//! Wavelength Sampling

use super::{Wavelength, LAMBDA_MAX, LAMBDA_MIN, LAMBDA_RANGE, SPECTRUM_SAMPLES};
use crate::math::*;

/// Expands one canonical uniform sample into one sample per wavelength slot
/// by shifting it in equal steps and wrapping around the unit interval. The
/// resulting samples are stratified across the slots.
///
/// * `u` - Canonical uniform sample in [0, 1).
pub fn sample_shifted(u: Float) -> Wavelength {
    let mut c = [0.0; SPECTRUM_SAMPLES];
    for (i, v) in c.iter_mut().enumerate() {
        *v = fract(u + i as Float / SPECTRUM_SAMPLES as Float);
    }
    Wavelength::from(c)
}

/// Warps canonical uniform samples to wavelengths distributed uniformly over
/// the wavelength domain. A sample of 0 maps to the lower domain boundary
/// and a sample of 1 to the upper one.
///
/// * `sample` - Canonical uniform samples in [0, 1], one per wavelength slot.
pub fn sample_uniform_wavelength(sample: &Wavelength) -> Wavelength {
    let mut c = [0.0; SPECTRUM_SAMPLES];
    for (i, v) in c.iter_mut().enumerate() {
        *v = lerp(sample[i], LAMBDA_MIN, LAMBDA_MAX);
    }
    Wavelength::from(c)
}

/// Returns the sampling density matching `sample_uniform_wavelength`. It is
/// constant over the wavelength domain and integrates to 1 across it.
pub fn uniform_wavelength_pdf() -> Float {
    1.0 / LAMBDA_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn uniform_warp_maps_domain_edges_to_boundaries() {
        let lo = sample_uniform_wavelength(&Wavelength::new(0.0));
        let hi = sample_uniform_wavelength(&Wavelength::new(1.0));
        for i in 0..SPECTRUM_SAMPLES {
            assert_eq!(lo[i], LAMBDA_MIN);
            assert_eq!(hi[i], LAMBDA_MAX);
        }
    }

    #[test]
    fn uniform_pdf_integrates_to_one_over_the_domain() {
        assert!(approx_eq!(
            Float,
            uniform_wavelength_pdf() * LAMBDA_RANGE,
            1.0,
            ulps = 2
        ));
    }

    #[test]
    fn shifted_samples_stay_in_the_unit_interval_and_are_stratified() {
        let s = sample_shifted(0.9);
        for i in 0..SPECTRUM_SAMPLES {
            assert!((0.0..1.0).contains(&s[i]));
        }
        // Consecutive slots are 1/N apart modulo 1.
        let step = 1.0 / SPECTRUM_SAMPLES as Float;
        for i in 1..SPECTRUM_SAMPLES {
            let d = fract(s[i] - s[i - 1] + 1.0);
            assert!(approx_eq!(Float, d, step, epsilon = 1e-6));
        }
    }
}
