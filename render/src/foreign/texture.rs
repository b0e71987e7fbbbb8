//! Foreign Texture Trampoline

use super::require;
use crate::geometry::*;
use crate::interaction::SurfaceInteraction;
use crate::mask::Mask;
use crate::math::*;
use crate::spectrum::*;
use crate::texture::SpectralTexture;
use std::fmt;
use std::sync::Arc;

/// Callback evaluating the texture over a batch of surface interactions.
pub type TextureEvalFn =
    Arc<dyn Fn(&[SurfaceInteraction], &Mask) -> Vec<UnpolarizedSpectrum> + Send + Sync>;

/// Callback importance-sampling the spectral dimension.
pub type TextureSampleSpectrumFn = Arc<
    dyn Fn(&[SurfaceInteraction], &[Wavelength], &Mask) -> Vec<(Wavelength, UnpolarizedSpectrum)>
        + Send
        + Sync,
>;

/// Callback returning the spectral sampling density.
pub type TexturePdfSpectrumFn =
    Arc<dyn Fn(&[SurfaceInteraction], &Mask) -> Vec<Wavelength> + Send + Sync>;

/// Callback importance-sampling a 2-D position.
pub type TextureSamplePositionFn =
    Arc<dyn Fn(&[Point2f], &Mask) -> Vec<(Point2f, Float)> + Send + Sync>;

/// Callback returning the texture's mean value.
pub type TextureMeanFn = Arc<dyn Fn() -> Float + Send + Sync>;

/// Callback returning the diagnostic representation.
pub type TextureToStringFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Collects the callbacks of a foreign texture implementation. Every
/// operation of the `SpectralTexture` contract is mandatory; `build` fails
/// with a diagnostic naming the first missing one.
pub struct ForeignTextureBuilder {
    id: String,
    eval: Option<TextureEvalFn>,
    sample_spectrum: Option<TextureSampleSpectrumFn>,
    pdf_spectrum: Option<TexturePdfSpectrumFn>,
    sample_position: Option<TextureSamplePositionFn>,
    mean: Option<TextureMeanFn>,
    to_string: Option<TextureToStringFn>,
}

impl ForeignTextureBuilder {
    /// Create a builder with no operations supplied.
    ///
    /// * `id` - The foreign texture's identifier.
    pub fn new(id: &str) -> Self {
        Self {
            id: String::from(id),
            eval: None,
            sample_spectrum: None,
            pdf_spectrum: None,
            sample_position: None,
            mean: None,
            to_string: None,
        }
    }

    /// Supply the `eval` operation.
    ///
    /// * `f` - The callback.
    pub fn with_eval<F>(mut self, f: F) -> Self
    where
        F: Fn(&[SurfaceInteraction], &Mask) -> Vec<UnpolarizedSpectrum> + Send + Sync + 'static,
    {
        self.eval = Some(Arc::new(f));
        self
    }

    /// Supply the `sample_spectrum` operation.
    ///
    /// * `f` - The callback.
    pub fn with_sample_spectrum<F>(mut self, f: F) -> Self
    where
        F: Fn(&[SurfaceInteraction], &[Wavelength], &Mask) -> Vec<(Wavelength, UnpolarizedSpectrum)>
            + Send
            + Sync
            + 'static,
    {
        self.sample_spectrum = Some(Arc::new(f));
        self
    }

    /// Supply the `pdf_spectrum` operation.
    ///
    /// * `f` - The callback.
    pub fn with_pdf_spectrum<F>(mut self, f: F) -> Self
    where
        F: Fn(&[SurfaceInteraction], &Mask) -> Vec<Wavelength> + Send + Sync + 'static,
    {
        self.pdf_spectrum = Some(Arc::new(f));
        self
    }

    /// Supply the `sample_position` operation.
    ///
    /// * `f` - The callback.
    pub fn with_sample_position<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Point2f], &Mask) -> Vec<(Point2f, Float)> + Send + Sync + 'static,
    {
        self.sample_position = Some(Arc::new(f));
        self
    }

    /// Supply the `mean` operation.
    ///
    /// * `f` - The callback.
    pub fn with_mean<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Float + Send + Sync + 'static,
    {
        self.mean = Some(Arc::new(f));
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
    pub fn build(self) -> Result<ForeignTexture, String> {
        let id = self.id;
        Ok(ForeignTexture {
            eval: require(self.eval, "texture", &id, "eval")?,
            sample_spectrum: require(self.sample_spectrum, "texture", &id, "sample_spectrum")?,
            pdf_spectrum: require(self.pdf_spectrum, "texture", &id, "pdf_spectrum")?,
            sample_position: require(self.sample_position, "texture", &id, "sample_position")?,
            mean: require(self.mean, "texture", &id, "mean")?,
            to_string: require(self.to_string, "texture", &id, "to_string")?,
            id,
        })
    }
}

/// Trampoline adapting a foreign implementation to the `SpectralTexture`
/// contract. Each call is forwarded with its original arguments and
/// activity mask; results are propagated unchanged.
pub struct ForeignTexture {
    /// The foreign texture's identifier.
    id: String,

    eval: TextureEvalFn,
    sample_spectrum: TextureSampleSpectrumFn,
    pdf_spectrum: TexturePdfSpectrumFn,
    sample_position: TextureSamplePositionFn,
    mean: TextureMeanFn,
    to_string: TextureToStringFn,
}

impl SpectralTexture for ForeignTexture {
    /// Returns the texture's human-readable identifier.
    fn id(&self) -> &str {
        &self.id
    }

    /// Forwards to the foreign `eval` operation.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `active` - The activity mask.
    fn eval(&self, si: &[SurfaceInteraction], active: &Mask) -> Vec<UnpolarizedSpectrum> {
        (self.eval)(si, active)
    }

    /// Forwards to the foreign `sample_spectrum` operation.
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
        (self.sample_spectrum)(si, sample, active)
    }

    /// Forwards to the foreign `pdf_spectrum` operation.
    ///
    /// * `si`     - Surface interactions, one per lane.
    /// * `active` - The activity mask.
    fn pdf_spectrum(&self, si: &[SurfaceInteraction], active: &Mask) -> Vec<Wavelength> {
        (self.pdf_spectrum)(si, active)
    }

    /// Forwards to the foreign `sample_position` operation.
    ///
    /// * `sample` - Canonical uniform samples, one per lane.
    /// * `active` - The activity mask.
    fn sample_position(&self, sample: &[Point2f], active: &Mask) -> Vec<(Point2f, Float)> {
        (self.sample_position)(sample, active)
    }

    /// Forwards to the foreign `mean` operation.
    fn mean(&self) -> Float {
        (self.mean)()
    }
}

impl fmt::Display for ForeignTexture {
    /// Forwards to the foreign `to_string` operation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (self.to_string)())
    }
}

impl fmt::Debug for ForeignTexture {
    /// Forwards to the `Display` implementation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{masked_map, masked_map2};

    fn complete_builder() -> ForeignTextureBuilder {
        ForeignTextureBuilder::new("scripted")
            .with_eval(|si, active| masked_map(si, active, |_| UnpolarizedSpectrum::new(0.25)))
            .with_sample_spectrum(|si, sample, active| {
                masked_map2(si, sample, active, |_, u| {
                    let wl = sample_uniform_wavelength(u);
                    (wl, UnpolarizedSpectrum::new(0.25) / uniform_wavelength_pdf())
                })
            })
            .with_pdf_spectrum(|si, active| {
                masked_map(si, active, |_| Wavelength::new(uniform_wavelength_pdf()))
            })
            .with_sample_position(|sample, active| masked_map(sample, active, |s| (*s, 1.0)))
            .with_mean(|| 0.25)
            .with_to_string(|| String::from("ScriptedTexture"))
    }

    #[test]
    fn complete_foreign_texture_builds_and_forwards() {
        let tex = complete_builder().build().unwrap();
        assert_eq!(tex.id(), "scripted");
        assert_eq!(tex.mean(), 0.25);
        assert_eq!(tex.to_string(), "ScriptedTexture");

        let si = [SurfaceInteraction::default(); 3];
        let out = tex.eval(&si, &Mask::all(3));
        assert_eq!(out, vec![UnpolarizedSpectrum::new(0.25); 3]);
    }

    #[test]
    fn trampoline_preserves_the_activity_mask() {
        let tex = complete_builder().build().unwrap();
        let si = [SurfaceInteraction::default(); 3];
        let active = Mask::from(vec![true, false, true]);
        let out = tex.eval(&si, &active);
        assert_eq!(out[0], UnpolarizedSpectrum::new(0.25));
        assert_eq!(out[1], UnpolarizedSpectrum::ZERO);
        assert_eq!(out[2], UnpolarizedSpectrum::new(0.25));
    }

    #[test]
    fn missing_mean_fails_construction_naming_the_operation() {
        let err = ForeignTextureBuilder::new("scripted")
            .with_eval(|si, active| masked_map(si, active, |_| UnpolarizedSpectrum::ZERO))
            .with_sample_spectrum(|si, sample, active| {
                masked_map2(si, sample, active, |_, u| {
                    (sample_uniform_wavelength(u), UnpolarizedSpectrum::ZERO)
                })
            })
            .with_pdf_spectrum(|si, active| {
                masked_map(si, active, |_| Wavelength::new(uniform_wavelength_pdf()))
            })
            .with_sample_position(|sample, active| masked_map(sample, active, |s| (*s, 1.0)))
            .with_to_string(|| String::from("ScriptedTexture"))
            .build()
            .unwrap_err();
        assert!(err.contains("mean"));
        assert!(err.contains("scripted"));
    }

    #[test]
    fn missing_eval_fails_construction_naming_the_operation() {
        let err = ForeignTextureBuilder::new("scripted").build().unwrap_err();
        assert!(err.contains("'eval'"));
    }
}
