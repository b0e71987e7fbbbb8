//! Surface Normals

#![allow(dead_code)]
use super::Vector3;
use crate::math::*;
use num_traits::{Num, Zero};
use std::ops::Neg;

/// A 3-D surface normal containing numeric values. Normals are not
/// necessarily normalized.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Normal3<T> {
    /// X-component.
    pub x: T,

    /// Y-component.
    pub y: T,

    /// Z-component.
    pub z: T,
}

/// 3-D normal containing `Float` values.
pub type Normal3f = Normal3<Float>;

impl<T: Num> Normal3<T> {
    /// Creates a new 3-D normal.
    ///
    /// * `x` - X-component.
    /// * `y` - Y-component.
    /// * `z` - Z-component.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero normal.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns the dot product with a vector.
    ///
    /// * `v` - The vector.
    pub fn dot(&self, v: &Vector3<T>) -> T
    where
        T: Copy,
    {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Returns the unit normal.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        Self::new(self.x / len, self.y / len, self.z / len)
    }
}

impl<T: Num + Neg<Output = T>> Neg for Normal3<T> {
    type Output = Self;

    /// Flips the normal's direction.
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Num> From<Vector3<T>> for Normal3<T> {
    /// Reinterprets a vector as a surface normal.
    ///
    /// * `v` - The vector.
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Num> From<Normal3<T>> for Vector3<T> {
    /// Reinterprets a surface normal as a vector.
    ///
    /// * `n` - The normal.
    fn from(n: Normal3<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}
