//! 3-D Axis Aligned Bounding Boxes

#![allow(dead_code)]
use super::{Point3, Point3f, Vector3, Vector3f};
use crate::math::*;
use num_traits::Num;

/// A 3-D axis aligned bounding box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds3<T> {
    /// Minimum bounds.
    pub p_min: Point3<T>,

    /// Maximum bounds.
    pub p_max: Point3<T>,
}

/// 3-D bounding box containing `Float` values.
pub type Bounds3f = Bounds3<Float>;

/// 3-D bounding box containing `Int` values.
pub type Bounds3i = Bounds3<Int>;

impl<T: Num + PartialOrd + Copy> Bounds3<T> {
    /// Creates a new bounding box from 2 points. The minimum and maximum
    /// bounds are used for each coordinate axis.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Self {
            p_min: Point3::new(min(p1.x, p2.x), min(p1.y, p2.y), min(p1.z, p2.z)),
            p_max: Point3::new(max(p1.x, p2.x), max(p1.y, p2.y), max(p1.z, p2.z)),
        }
    }

    /// Returns the vector along the box diagonal from the minimum point to
    /// the maximum point.
    pub fn diagonal(&self) -> Vector3<T> {
        self.p_max - self.p_min
    }

    /// Returns true if a point is inside the bounding box. The point on the
    /// upper boundary is considered inside.
    ///
    /// * `p` - The point.
    pub fn contains(&self, p: &Point3<T>) -> bool {
        p.x >= self.p_min.x
            && p.x <= self.p_max.x
            && p.y >= self.p_min.y
            && p.y <= self.p_max.y
            && p.z >= self.p_min.z
            && p.z <= self.p_max.z
    }

    /// Returns true if a point is inside the bounding box excluding the
    /// upper boundary.
    ///
    /// * `p` - The point.
    pub fn contains_exclusive(&self, p: &Point3<T>) -> bool {
        p.x >= self.p_min.x
            && p.x < self.p_max.x
            && p.y >= self.p_min.y
            && p.y < self.p_max.y
            && p.z >= self.p_min.z
            && p.z < self.p_max.z
    }
}

impl Bounds3f {
    /// The unit cube [0, 1]^3.
    pub const UNIT: Self = Self {
        p_min: Point3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        p_max: Point3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        },
    };

    /// Returns the continuous position of a point relative to the corners of
    /// the box, where the minimum corner maps to (0, 0, 0) and the maximum
    /// corner to (1, 1, 1).
    ///
    /// * `p` - The point.
    pub fn offset(&self, p: &Point3f) -> Vector3f {
        let mut o = *p - self.p_min;
        if self.p_max.x > self.p_min.x {
            o.x /= self.p_max.x - self.p_min.x;
        }
        if self.p_max.y > self.p_min.y {
            o.y /= self.p_max.y - self.p_min.y;
        }
        if self.p_max.z > self.p_min.z {
            o.z /= self.p_max.z - self.p_min.z;
        }
        o
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> Point3f {
        self.p_min + self.diagonal() * 0.5
    }
}
