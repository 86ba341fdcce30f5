//! Operator overloads for [`Quaternion`].
//!
//! Immutable and compound-assignment forms share one implementation, so `q * s` and
//! `q *= s` produce identical numbers.

use crate::quaternion::Quaternion;
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: Float> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Float> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs = *lhs + rhs;
        }
    }
}

impl<T: Float> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Float> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs = *lhs - rhs;
        }
    }
}

impl<T: Float> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.a(), -self.b(), -self.c(), -self.d())
    }
}

/// Hamilton product.
///
/// For q1 = a1 + b1*i + c1*j + d1*k and q2 = a2 + b2*i + c2*j + d2*k:
/// q1 * q2 = (a1*a2 - b1*b2 - c1*c2 - d1*d2) +
///           (a1*b2 + b1*a2 + c1*d2 - d1*c2)*i +
///           (a1*c2 - b1*d2 + c1*a2 + d1*b2)*j +
///           (a1*d2 + b1*c2 - c1*b2 + d1*a2)*k
impl<T: Float> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [a1, b1, c1, d1] = self.data;
        let [a2, b2, c2, d2] = rhs.data;

        Self::new(
            a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
            a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
            a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
            a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        )
    }
}

impl<T: Float> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Float> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(mut self, scale: T) -> Self {
        self *= scale;
        self
    }
}

impl<T: Float> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, scale: T) {
        for value in self.data.iter_mut() {
            *value = *value * scale;
        }
    }
}

impl<T: Float> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(mut self, divisor: T) -> Self {
        self /= divisor;
        self
    }
}

impl<T: Float> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, divisor: T) {
        for value in self.data.iter_mut() {
            *value = *value / divisor;
        }
    }
}
