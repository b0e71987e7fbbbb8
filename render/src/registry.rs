//! Plugin Registry
//!
//! Maps type names from scene descriptions to constructor entry points.
//! The registry is an explicit value with caller-controlled lifetime:
//! created once at startup, filled by explicit registration calls, read
//! thereafter. Registration collisions and unknown type names are
//! construction-time errors that halt scene loading.

use crate::properties::Properties;
use crate::texture::ArcSpectralTexture;
use crate::volume::ArcSpatialVolume;
use std::collections::HashMap;

/// Constructor entry point for a texture type.
pub type TextureConstructor =
    Box<dyn Fn(&Properties) -> Result<ArcSpectralTexture, String> + Send + Sync>;

/// Constructor entry point for a volume type.
pub type VolumeConstructor =
    Box<dyn Fn(&Properties) -> Result<ArcSpatialVolume, String> + Send + Sync>;

/// Registry of texture and volume types instantiable by name.
#[derive(Default)]
pub struct PluginRegistry {
    /// Registered texture constructors by type name.
    textures: HashMap<String, TextureConstructor>,

    /// Registered volume constructors by type name.
    volumes: HashMap<String, VolumeConstructor>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a texture type. Fails if the name is already taken.
    ///
    /// * `name` - The type name used in scene descriptions.
    /// * `ctor` - The construction entry point.
    pub fn register_texture<F>(&mut self, name: &str, ctor: F) -> Result<(), String>
    where
        F: Fn(&Properties) -> Result<ArcSpectralTexture, String> + Send + Sync + 'static,
    {
        if self.textures.contains_key(name) {
            return Err(format!("texture type '{}' is already registered", name));
        }
        info!("Registered texture type '{}'", name);
        self.textures.insert(String::from(name), Box::new(ctor));
        Ok(())
    }

    /// Registers a volume type. Fails if the name is already taken.
    ///
    /// * `name` - The type name used in scene descriptions.
    /// * `ctor` - The construction entry point.
    pub fn register_volume<F>(&mut self, name: &str, ctor: F) -> Result<(), String>
    where
        F: Fn(&Properties) -> Result<ArcSpatialVolume, String> + Send + Sync + 'static,
    {
        if self.volumes.contains_key(name) {
            return Err(format!("volume type '{}' is already registered", name));
        }
        info!("Registered volume type '{}'", name);
        self.volumes.insert(String::from(name), Box::new(ctor));
        Ok(())
    }

    /// Instantiates a texture by type name.
    ///
    /// * `name`  - The type name.
    /// * `props` - Construction properties.
    pub fn create_texture(
        &self,
        name: &str,
        props: &Properties,
    ) -> Result<ArcSpectralTexture, String> {
        match self.textures.get(name) {
            Some(ctor) => ctor(props),
            None => Err(format!("unknown texture type '{}'", name)),
        }
    }

    /// Instantiates a volume by type name.
    ///
    /// * `name`  - The type name.
    /// * `props` - Construction properties.
    pub fn create_volume(&self, name: &str, props: &Properties) -> Result<ArcSpatialVolume, String> {
        match self.volumes.get(name) {
            Some(ctor) => ctor(props),
            None => Err(format!("unknown volume type '{}'", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foreign::ForeignTextureBuilder;
    use crate::mask::{masked_map, masked_map2};
    use crate::spectrum::*;
    use crate::texture::SpectralTexture;
    use std::sync::Arc;

    fn scripted_texture(props: &Properties) -> Result<ArcSpectralTexture, String> {
        let value = props.find_float("value", 1.0);
        let tex = ForeignTextureBuilder::new(props.id())
            .with_eval(move |si, active| {
                masked_map(si, active, |_| UnpolarizedSpectrum::new(value))
            })
            .with_sample_spectrum(move |si, sample, active| {
                masked_map2(si, sample, active, |_, u| {
                    let wl = sample_uniform_wavelength(u);
                    (wl, UnpolarizedSpectrum::new(value) / uniform_wavelength_pdf())
                })
            })
            .with_pdf_spectrum(|si, active| {
                masked_map(si, active, |_| Wavelength::new(uniform_wavelength_pdf()))
            })
            .with_sample_position(|sample, active| masked_map(sample, active, |s| (*s, 1.0)))
            .with_mean(move || value)
            .with_to_string(|| String::from("ScriptedTexture"))
            .build()?;
        Ok(Arc::new(tex))
    }

    #[test]
    fn registered_type_is_instantiable_by_name() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut registry = PluginRegistry::new();
        registry
            .register_texture("scripted", scripted_texture)
            .unwrap();

        let mut props = Properties::new("my_tex");
        props.add_float("value", 0.5);
        let tex = registry.create_texture("scripted", &props).unwrap();
        assert_eq!(tex.id(), "my_tex");
        assert_eq!(tex.mean(), 0.5);
    }

    #[test]
    fn duplicate_registration_is_an_error() {
        let mut registry = PluginRegistry::new();
        registry
            .register_texture("scripted", scripted_texture)
            .unwrap();
        let err = registry
            .register_texture("scripted", scripted_texture)
            .unwrap_err();
        assert!(err.contains("already registered"));
    }

    #[test]
    fn unknown_type_name_is_an_error() {
        let registry = PluginRegistry::new();
        let err = registry
            .create_texture("nope", &Properties::new("t"))
            .unwrap_err();
        assert!(err.contains("nope"));
    }
}
