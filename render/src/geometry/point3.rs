//! 3-D Points

#![allow(dead_code)]
use super::Vector3;
use crate::math::*;
use num_traits::{Num, Zero};
use std::ops::{Add, Index, Sub};

/// A 3-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

/// 3-D point containing `Int` values.
pub type Point3i = Point3<Int>;

impl<T: Num> Point3<T> {
    /// Creates a new 3-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero point.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if any coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns a new point containing floor of values of the components.
    pub fn floor(&self) -> Self
    where
        T: num_traits::Float,
    {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }
}

impl<T: Num> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offsets the point by the given vector and returns the result.
    ///
    /// * `v` - The vector offset.
    fn add(self, v: Vector3<T>) -> Self::Output {
        Self::Output::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Num> Sub for Point3<T> {
    type Output = Vector3<T>;

    /// Subtracts the given point and returns the vector between them.
    ///
    /// * `other` - The point to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offsets the point backwards by the given vector and returns the result.
    ///
    /// * `v` - The vector offset.
    fn sub(self, v: Vector3<T>) -> Self::Output {
        Self::Output::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T> Index<usize> for Point3<T> {
    type Output = T;

    /// Index the point by axis (0 = x, 1 = y, 2 = z).
    ///
    /// * `index` - The axis.
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid index for std::Index on Point3<T>"),
        }
    }
}

impl From<Point3f> for Point3i {
    /// Truncates floating point coordinates towards negative infinity.
    ///
    /// * `p` - The floating point coordinates.
    fn from(p: Point3f) -> Self {
        Self::new(p.x.floor() as Int, p.y.floor() as Int, p.z.floor() as Int)
    }
}

impl From<Point3i> for Point3f {
    /// Converts integer coordinates to their floating point counterparts.
    ///
    /// * `p` - The integer coordinates.
    fn from(p: Point3i) -> Self {
        Self::new(p.x as Float, p.y as Float, p.z as Float)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Vector3f;
    use super::*;

    #[test]
    fn point_minus_point_is_a_vector() {
        let v = Point3f::new(2.0, 3.0, 4.0) - Point3f::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3f::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn conversion_to_integer_floors_negative_coordinates() {
        let p = Point3i::from(Point3f::new(-0.5, 1.5, 2.0));
        assert_eq!(p, Point3i::new(-1, 1, 2));
    }
}
