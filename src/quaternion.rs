//! Quaternion value type, generic over the floating-point scalar.
//!
//! A quaternion is stored as the four components `(a, b, c, d)` of
//! `a + b·i + c·j + d·k`, i.e. `(w, x, y, z)` in the usual rotation notation.
//!
//! Unlike a unit-quaternion type, nothing here normalizes implicitly: a value built with
//! [`Quaternion::new`] keeps exactly the components it was given. Only
//! [`Quaternion::normalize`] (and the renormalizing integrators) enforce unit length.
//! The rotation factories produce unit quaternions by construction.
//!
//! # Examples
//!
//! ```
//! use apex_quaternion::Quaternion;
//! use std::f64::consts::PI;
//!
//! let qx = Quaternion::rotation(PI / 3.0, 1.0, 0.0, 0.0);
//! assert!((qx.a() - 3.0_f64.sqrt() / 2.0).abs() < 1e-12);
//! assert!((qx.b() - 0.5).abs() < 1e-12);
//!
//! // q * q* is the identity for a unit quaternion
//! let id = qx * qx.conjugate();
//! assert!(id.is_approx(&Quaternion::identity(), 1e-12));
//! ```

use crate::error::{QuatError, QuatResult};
use num_traits::{Float, NumCast};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Single-precision quaternion.
pub type Quaternionf = Quaternion<f32>;

/// Double-precision quaternion.
pub type Quaterniond = Quaternion<f64>;

/// A quaternion `a + b·i + c·j + d·k` over the scalar type `T`.
///
/// Components are addressable by index 0..=3 in the order (a, b, c, d).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<T> {
    /// Internal storage: [a, b, c, d]
    pub(crate) data: [T; 4],
}

#[inline]
pub(crate) fn two<T: Float>() -> T {
    T::one() + T::one()
}

#[inline]
pub(crate) fn half<T: Float>() -> T {
    two::<T>().recip()
}

impl<T: Float + fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(a: {:.4}, b: {:.4}, c: {:.4}, d: {:.4})",
            self.a(),
            self.b(),
            self.c(),
            self.d()
        )
    }
}

impl<T: Float> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Index<usize> for Quaternion<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Quaternion<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Float> Quaternion<T> {
    /// Create a quaternion from its components, stored verbatim.
    ///
    /// # Arguments
    /// * `a` - Real (scalar) part
    /// * `b` - i component
    /// * `c` - j component
    /// * `d` - k component
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// The identity rotation (1, 0, 0, 0).
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Pure quaternion (0, x, y, z), used to carry an angular velocity.
    #[inline]
    pub fn pure(x: T, y: T, z: T) -> Self {
        Self::new(T::zero(), x, y, z)
    }

    /// Real (scalar) component.
    #[inline]
    pub fn a(&self) -> T {
        self.data[0]
    }

    /// i component.
    #[inline]
    pub fn b(&self) -> T {
        self.data[1]
    }

    /// j component.
    #[inline]
    pub fn c(&self) -> T {
        self.data[2]
    }

    /// k component.
    #[inline]
    pub fn d(&self) -> T {
        self.data[3]
    }

    /// All components as an array [a, b, c, d].
    #[inline]
    pub fn coords(&self) -> [T; 4] {
        self.data
    }

    /// Convert to another scalar type. Returns None if a component is not representable.
    pub fn cast<U: Float>(&self) -> Option<Quaternion<U>> {
        Some(Quaternion::new(
            <U as NumCast>::from(self.a())?,
            <U as NumCast>::from(self.b())?,
            <U as NumCast>::from(self.c())?,
            <U as NumCast>::from(self.d())?,
        ))
    }

    /// Build the unit quaternion of a right-handed rotation of `angle` radians about
    /// the axis (x, y, z).
    ///
    /// The axis does not need to be normalized; its length is taken with `hypot`, so
    /// large finite components do not overflow. An axis shorter than `T::epsilon()`
    /// yields the identity instead of dividing by zero.
    ///
    /// # Formula
    /// q = cos(θ/2) + sin(θ/2) * (ux*i + uy*j + uz*k)
    /// where (ux, uy, uz) is the normalized axis
    pub fn rotation(angle: T, x: T, y: T, z: T) -> Self {
        let axis_norm = x.hypot(y).hypot(z);
        if axis_norm < T::epsilon() {
            return Self::identity();
        }

        let (sin_half, cos_half) = (angle * half::<T>()).sin_cos();
        let scale = sin_half / axis_norm;

        Self::new(cos_half, x * scale, y * scale, z * scale)
    }

    /// Build the unit quaternion for a rotation vector: the rotation angle is the
    /// vector's length, the axis its direction.
    ///
    /// `rotation_vector(0, 0, 0)` is exactly the identity.
    pub fn rotation_vector(x: T, y: T, z: T) -> Self {
        let angle = x.hypot(y).hypot(z);
        if angle < T::epsilon() {
            return Self::identity();
        }

        let (sin_half, cos_half) = (angle * half::<T>()).sin_cos();
        let scale = sin_half / angle;

        Self::new(cos_half, x * scale, y * scale, z * scale)
    }

    /// Squared Euclidean norm over all four components.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm sqrt(a² + b² + c² + d²).
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.a() * other.a() + self.b() * other.b() + self.c() * other.c() + self.d() * other.d()
    }

    /// Conjugate a - b·i - c·j - d·k.
    ///
    /// For unit quaternions, the conjugate equals the inverse.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.a(), -self.b(), -self.c(), -self.d())
    }

    /// Divide every component by the norm, in place.
    ///
    /// The quaternion must not be zero: with a zero norm the components become NaN.
    /// Use [`Quaternion::try_normalize`] when that cannot be ruled out.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        for value in self.data.iter_mut() {
            *value = *value / norm;
        }
    }

    /// Normalized copy. Same precondition as [`Quaternion::normalize`].
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Checked normalization, rejecting zero (and non-finite) norms.
    pub fn try_normalize(&mut self) -> QuatResult<()> {
        let norm = self.norm();
        if !norm.is_finite() {
            return Err(QuatError::NonFinite(
                "quaternion norm is not finite".to_string(),
            ));
        }
        if norm == T::zero() {
            return Err(QuatError::ZeroNorm);
        }
        self.normalize();
        Ok(())
    }

    /// Multiplicative inverse q* / |q|².
    ///
    /// Equals the conjugate for unit quaternions. Undefined for the zero quaternion.
    pub fn inverse(&self) -> Self {
        let norm_sq = self.norm_squared();
        let conj = self.conjugate();
        Self::new(
            conj.a() / norm_sq,
            conj.b() / norm_sq,
            conj.c() / norm_sq,
            conj.d() / norm_sq,
        )
    }

    /// Checked inverse, rejecting the zero quaternion.
    pub fn try_inverse(&self) -> QuatResult<Self> {
        if self.norm_squared() == T::zero() {
            return Err(QuatError::ZeroNorm);
        }
        Ok(self.inverse())
    }

    /// Rotate a 3D vector by this (unit) quaternion.
    ///
    /// Computes q * v * q* where v is treated as a pure quaternion (0, x, y, z).
    pub fn rotate_vector(&self, v: [T; 3]) -> [T; 3] {
        let w = self.a();
        let (qx, qy, qz) = (self.b(), self.c(), self.d());
        let [vx, vy, vz] = v;
        let two = two::<T>();

        // t = 2 * qv × v
        let tx = two * (qy * vz - qz * vy);
        let ty = two * (qz * vx - qx * vz);
        let tz = two * (qx * vy - qy * vx);

        // v' = v + w*t + qv × t
        [
            vx + w * tx + (qy * tz - qz * ty),
            vy + w * ty + (qz * tx - qx * tz),
            vz + w * tz + (qx * ty - qy * tx),
        ]
    }

    /// Check if this is approximately equal to another quaternion.
    ///
    /// Accounts for quaternion double-cover (q and -q represent the same rotation).
    pub fn is_approx(&self, other: &Self, tolerance: T) -> bool {
        let same = self
            .data
            .iter()
            .zip(other.data.iter())
            .all(|(&x, &y)| (x - y).abs() < tolerance);
        let flipped = self
            .data
            .iter()
            .zip(other.data.iter())
            .all(|(&x, &y)| (x + y).abs() < tolerance);

        same || flipped
    }
}

// ============================================================================
// Tests
// ============================================================================
