//! Built-in spatial volumes

use render::registry::PluginRegistry;
use render::volume::{ArcSpatialVolume, SpatialVolume};
use std::sync::Arc;

#[macro_use]
extern crate log;

mod constant;
mod grid;

// Re-export
pub use constant::*;
pub use grid::*;

/// Registers the built-in volume types with a plugin registry.
///
/// * `registry` - The registry to fill.
pub fn register_defaults(registry: &mut PluginRegistry) -> Result<(), String> {
    registry.register_volume("constant", |props| {
        let vol: ArcSpatialVolume = Arc::new(ConstantVolume::from(props));
        Ok(vol)
    })?;
    registry.register_volume("grid", |props| {
        let vol: ArcSpatialVolume = Arc::new(GridVolume::from_props(props)?);
        Ok(vol)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use render::properties::Properties;

    #[test]
    fn defaults_register_and_instantiate_by_name() {
        let mut registry = PluginRegistry::new();
        register_defaults(&mut registry).unwrap();

        let mut props = Properties::new("fog");
        props.add_float("value", 2.0);
        let vol = registry.create_volume("constant", &props).unwrap();
        assert_eq!(vol.id(), "fog");
        assert_eq!(vol.max_value(), 2.0);
    }

    #[test]
    fn grid_construction_through_the_registry_reports_bad_data() {
        let mut registry = PluginRegistry::new();
        register_defaults(&mut registry).unwrap();

        let mut props = Properties::new("smoke");
        props.add_int("nx", 2);
        props.add_int("ny", 2);
        props.add_int("nz", 2);
        props.add_float_list("data", vec![1.0; 7]);
        let err = registry.create_volume("grid", &props).unwrap_err();
        assert!(err.contains("smoke"));
    }
}
