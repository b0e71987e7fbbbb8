//! Shading Frames

#![allow(dead_code)]
use super::{Normal3f, Vector3f};
use crate::math::*;

/// An orthonormal coordinate frame used for shading computations at a
/// surface point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// First tangent.
    pub s: Vector3f,

    /// Second tangent.
    pub t: Vector3f,

    /// Normal.
    pub n: Normal3f,
}

impl Frame {
    /// Create a new frame from its basis vectors.
    ///
    /// * `s` - First tangent.
    /// * `t` - Second tangent.
    /// * `n` - Normal.
    pub fn new(s: Vector3f, t: Vector3f, n: Normal3f) -> Self {
        Self { s, t, n }
    }

    /// Construct a frame around a unit normal. The tangents are chosen to
    /// avoid cancellation when the normal is close to an axis.
    ///
    /// * `n` - The unit normal.
    pub fn from_normal(n: Normal3f) -> Self {
        let nv = Vector3f::from(n);
        let s = if abs(nv.x) > abs(nv.y) {
            Vector3f::new(-nv.z, 0.0, nv.x) / (nv.x * nv.x + nv.z * nv.z).sqrt()
        } else {
            Vector3f::new(0.0, nv.z, -nv.y) / (nv.y * nv.y + nv.z * nv.z).sqrt()
        };
        let t = nv.cross(&s);
        Self::new(s, t, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn frame_from_normal_is_orthonormal() {
        let f = Frame::from_normal(Normal3f::new(0.0, 0.0, 1.0));
        assert!(approx_eq!(Float, f.s.length(), 1.0, ulps = 2));
        assert!(approx_eq!(Float, f.t.length(), 1.0, ulps = 2));
        assert!(approx_eq!(Float, f.s.dot(&f.t), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, f.n.dot(&f.s), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, f.n.dot(&f.t), 0.0, epsilon = 1e-6));
    }
}
