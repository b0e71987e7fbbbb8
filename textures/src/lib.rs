//! Built-in spectral textures

use render::registry::PluginRegistry;
use render::texture::{ArcSpectralTexture, SpectralTexture};
use std::sync::Arc;

#[macro_use]
extern crate log;

mod checkerboard;
mod constant;

// Re-export
pub use checkerboard::*;
pub use constant::*;

/// Registers the built-in texture types with a plugin registry.
///
/// * `registry` - The registry to fill.
pub fn register_defaults(registry: &mut PluginRegistry) -> Result<(), String> {
    registry.register_texture("constant", |props| {
        let tex: ArcSpectralTexture = Arc::new(ConstantTexture::from(props));
        Ok(tex)
    })?;
    registry.register_texture("checkerboard", |props| {
        let tex: ArcSpectralTexture = Arc::new(CheckerboardTexture::from(props));
        Ok(tex)
    })?;
    Ok(())
}
