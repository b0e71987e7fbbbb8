//! Properties
//!
//! An opaque key/value bag handed to texture and volume constructors. It is
//! filled by the surrounding scene-loading code; this layer only reads from
//! it and imposes no parsing logic.

use crate::geometry::*;
use crate::math::*;
use crate::spectrum::*;
use std::collections::HashMap;

/// Stores construction properties of different types in hashmaps.
#[derive(Clone, Debug, Default)]
pub struct Properties {
    /// Identifier for the object under construction.
    id: String,

    bools: HashMap<String, bool>,
    ints: HashMap<String, Int>,
    floats: HashMap<String, Float>,
    strings: HashMap<String, String>,
    point3fs: HashMap<String, Point3f>,
    float_lists: HashMap<String, Vec<Float>>,
    spectra: HashMap<String, UnpolarizedSpectrum>,
}

/// Define a macro that can be used to generate a function for adding or
/// replacing a property.
macro_rules! properties_add {
    ($func: ident, $t: ty, $map: ident) => {
        /// Adds or replaces a property.
        ///
        /// * `name`  - Property name.
        /// * `value` - Property value.
        pub fn $func(&mut self, name: &str, value: $t) {
            self.$map.insert(String::from(name), value);
        }
    };
}

/// Define a macro that can be used to generate a function for looking up a
/// property, falling back to a caller-supplied default.
macro_rules! properties_find {
    ($func: ident, $t: ty, $map: ident) => {
        /// Returns a property value, or the given default if the property
        /// is absent.
        ///
        /// * `name`    - Property name.
        /// * `default` - Default value.
        pub fn $func(&self, name: &str, default: $t) -> $t {
            match self.$map.get(name) {
                Some(value) => value.clone(),
                None => default,
            }
        }
    };
}

impl Properties {
    /// Create an empty property bag.
    ///
    /// * `id` - Identifier for the object under construction.
    pub fn new(id: &str) -> Self {
        Self {
            id: String::from(id),
            ..Default::default()
        }
    }

    /// Returns the identifier for the object under construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    properties_add!(add_bool, bool, bools);
    properties_add!(add_int, Int, ints);
    properties_add!(add_float, Float, floats);
    properties_add!(add_string, String, strings);
    properties_add!(add_point3f, Point3f, point3fs);
    properties_add!(add_float_list, Vec<Float>, float_lists);
    properties_add!(add_spectrum, UnpolarizedSpectrum, spectra);

    properties_find!(find_bool, bool, bools);
    properties_find!(find_int, Int, ints);
    properties_find!(find_float, Float, floats);
    properties_find!(find_string, String, strings);
    properties_find!(find_point3f, Point3f, point3fs);
    properties_find!(find_float_list, Vec<Float>, float_lists);
    properties_find!(find_spectrum, UnpolarizedSpectrum, spectra);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_default_for_absent_properties() {
        let props = Properties::new("tex");
        assert_eq!(props.id(), "tex");
        assert_eq!(props.find_float("value", 1.0), 1.0);
        assert_eq!(props.find_string("kind", String::from("none")), "none");
    }

    #[test]
    fn added_properties_are_found_by_name() {
        let mut props = Properties::new("tex");
        props.add_float("value", 0.5);
        props.add_point3f("min", Point3f::new(-1.0, -1.0, -1.0));
        props.add_float_list("data", vec![1.0, 2.0]);
        assert_eq!(props.find_float("value", 1.0), 0.5);
        assert_eq!(
            props.find_point3f("min", Point3f::zero()),
            Point3f::new(-1.0, -1.0, -1.0)
        );
        assert_eq!(props.find_float_list("data", Vec::new()), vec![1.0, 2.0]);
    }
}
