//! Scalar and vector math
//!
//! Only what the scroll mappers need: a small `Vec3`, linear interpolation and
//! the per-frame exponential follow used by the trailing filters.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Linear interpolation between `a` and `b` by `t` (unclamped)
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp a value into [0, 1]
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Move `current` a fixed fraction of the way toward `target`.
///
/// Applied once per frame this is a first-order trailing filter: the remaining
/// distance shrinks geometrically by `1 - factor` each call.
#[inline]
pub fn follow<T: Interpolate>(current: &T, target: &T, factor: f32) -> T {
    current.lerp(target, factor)
}

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        lerp(*self, *other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

/// 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(&self, other: Vec3) -> f32 {
        (other - *self).length()
    }

    /// Component-wise linear interpolation
    pub fn lerp(&self, other: Vec3, t: f32) -> Vec3 {
        Vec3::new(
            lerp(self.x, other.x, t),
            lerp(self.y, other.y, t),
            lerp(self.z, other.z, t),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Interpolate for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(self, *other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((lerp(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((Interpolate::lerp(&10.0_f32, &20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_interpolation_endpoints_are_exact() {
        let a = Vec3::new(6.0, 6.0, 6.0);
        let b = Vec3::new(0.0, 10.0, 8.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(a, 0.37), a);

        let mid = a.lerp(b, 0.5);
        assert!(mid.approx_eq(&Vec3::new(3.0, 8.0, 7.0), 1e-6));
    }

    #[test]
    fn test_follow_shrinks_distance_geometrically() {
        let target = Vec3::new(0.0, 10.0, 8.0);
        let mut current = Vec3::new(6.0, 6.0, 6.0);
        let d0 = current.distance(target);

        for _ in 0..5 {
            current = follow(&current, &target, 0.1);
        }

        let expected = d0 * 0.9_f32.powi(5);
        assert!((current.distance(target) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.4), 0.4);
        assert_eq!(clamp01(1.05), 1.0);
    }
}
