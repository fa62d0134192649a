//! Vector types used by the chain (2D) and the ribbon mesh (3D).

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types used in physics calculations.
///
/// The integrator only needs the operations below, so it stays generic
/// over dimensionality even though the rope itself is planar.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Apply `f` to every component.
    fn map(self, f: impl Fn(Self::Scalar) -> Self::Scalar) -> Self;

    /// Largest absolute component.
    fn max_abs(self) -> Self::Scalar;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length, or return `fallback` when the length is
    /// too small to divide by.
    ///
    /// The fallback is returned as-is; callers pass a unit vector.
    fn normalize_or(self, fallback: Self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) || !len.is_finite() {
            fallback
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    /// Limit the magnitude to `max`, keeping direction.
    ///
    /// Always returns a finite vector. Infinite components dominate the
    /// direction, NaN components are dropped, and a vector with nothing
    /// left pointing anywhere becomes zero.
    fn clamp_length(self, max: Self::Scalar) -> Self {
        let len_sq = self.length_sq();
        if len_sq.is_finite() {
            if len_sq <= max * max {
                return self;
            }
            return self.scale(max / len_sq.sqrt());
        }

        // Squaring overflowed, or a component is infinite or NaN.
        let zero = Self::Scalar::zero();
        let one = Self::Scalar::one();
        let infinite = self.map(|c| {
            if c.is_finite() { zero } else if c > zero { one } else if c < zero { -one } else { zero }
        });
        let direction = if infinite != Self::zero() {
            infinite
        } else {
            let finite = self.map(|c| if c.is_finite() { c } else { zero });
            let largest = finite.max_abs();
            if largest.is_near_zero(Self::Scalar::from_f32(1e-30)) {
                return Self::zero();
            }
            finite.scale(one / largest)
        };
        direction.normalize_or(Self::zero()).scale(max)
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }
}

// --------------------------------------------------------------------------
// Vec2<F> — 2D vector
// --------------------------------------------------------------------------

/// 2D vector: particle positions, velocities, gravity and impulses.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Unit X axis, `(1, 0)`.
    pub fn unit_x() -> Self { Vec2 { x: F::one(), y: F::zero() } }

    /// Unit vector pointing down the Y axis, `(0, -1)`.
    pub fn down() -> Self { Vec2 { x: F::zero(), y: -F::one() } }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Lift into 3D at the given depth.
    pub fn extend(self, z: F) -> Vec3<F> {
        Vec3 { x: self.x, y: self.y, z }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn map(self, f: impl Fn(F) -> F) -> Self { Vec2 { x: f(self.x), y: f(self.y) } }
    fn max_abs(self) -> F { self.x.abs().max(self.y.abs()) }
}

// --------------------------------------------------------------------------
// Vec3<F> — 3D vector
// --------------------------------------------------------------------------

/// 3D point handed to renderers as a ribbon vertex.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
    fn map(self, f: impl Fn(F) -> F) -> Self {
        Vec3 { x: f(self.x), y: f(self.y), z: f(self.z) }
    }
    fn max_abs(self) -> F {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector_uses_fallback() {
        let v = Vec2::<f32>::zero();
        assert_eq!(v.normalize_or(Vec2::down()), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn normalize_nonzero_ignores_fallback() {
        let n = Vec2::new(0.0f32, 5.0).normalize_or(Vec2::unit_x());
        assert!((n.x - 0.0).abs() < 1e-6);
        assert!((n.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_length_preserves_direction() {
        let v = Vec2::new(30.0f32, 40.0).clamp_length(5.0);
        assert!((v.length() - 5.0).abs() < 1e-5);
        assert!((v.x - 3.0).abs() < 1e-5);
        assert!((v.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn clamp_length_leaves_short_vectors() {
        let v = Vec2::new(0.3f32, 0.4);
        assert_eq!(v.clamp_length(1.0), v);
    }

    #[test]
    fn clamp_length_zero_max() {
        let v = Vec2::new(2.0f64, -1.0).clamp_length(0.0);
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn clamp_length_infinite_component() {
        let v = Vec2::new(-0.0f32, f32::INFINITY).clamp_length(100.0);
        assert_eq!(v, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn clamp_length_overflowing_square_keeps_direction() {
        let v = Vec2::new(3.0e30f32, -4.0e30).clamp_length(5.0);
        assert!((v.x - 3.0).abs() < 1e-4);
        assert!((v.y - -4.0).abs() < 1e-4);
    }

    #[test]
    fn clamp_length_drops_nan() {
        let v = Vec2::new(f32::NAN, -2.0e30).clamp_length(1.0);
        assert_eq!(v, Vec2::new(0.0, -1.0));
        let v = Vec2::new(f32::NAN, f32::NAN).clamp_length(1.0);
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn perp_is_ccw() {
        let p = Vec2::new(1.0f32, 0.0).perp();
        assert_eq!(p, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn extend_to_3d() {
        let v = Vec2::new(1.0f32, 2.0).extend(0.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
