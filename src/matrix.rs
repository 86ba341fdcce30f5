//! Conversion between quaternions and 3×3 rotation matrices.
//!
//! The conversions do not depend on any particular linear-algebra library. They are
//! written against two small traits:
//!
//! - [`Matrix3View`]: read one element by (row, col)
//! - [`Matrix3Storage`]: additionally create a zeroed container and write one element
//!
//! Implementations are provided for `[[T; 3]; 3]` (row-major), `nalgebra::Matrix3`,
//! `nalgebra::DMatrix` and `faer::Mat`. Any other container can be plugged in by
//! implementing the two traits once.
//!
//! # Matrix → quaternion
//!
//! [`Quaternion::from_matrix`] uses Shepperd's method. The four quantities
//!
//! ```text
//! trace = M00 + M11 + M22      (4a² - 1)
//! M00 - M11 - M22              (4b² - 1)
//! M11 - M00 - M22              (4c² - 1)
//! M22 - M00 - M11              (4d² - 1)
//! ```
//!
//! are compared and the largest one picks the component solved by a square root. The
//! other three are recovered by dividing off-diagonal sums/differences by four times that
//! component, which is then at least 1/2. The single-branch trace formula divides by a
//! vanishing `a` for rotations close to π.

use crate::error::{QuatError, QuatResult};
use crate::quaternion::{Quaternion, half, two};
use faer::Mat;
use nalgebra::{DMatrix, Matrix3};
use num_traits::Float;
use tracing::debug;

/// Read access to a 3×3 numeric container.
pub trait Matrix3View<T> {
    /// Element at (row, col), both in 0..3.
    fn element(&self, row: usize, col: usize) -> T;

    /// (rows, cols). Statically sized containers keep the default.
    fn shape(&self) -> (usize, usize) {
        (3, 3)
    }
}

/// Write access to a 3×3 numeric container.
pub trait Matrix3Storage<T>: Matrix3View<T> + Sized {
    /// A 3×3 container filled with zeros.
    fn zeroed() -> Self;

    /// Overwrite the element at (row, col), both in 0..3.
    fn set_element(&mut self, row: usize, col: usize, value: T);
}

impl<T: Float> Matrix3View<T> for [[T; 3]; 3] {
    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self[row][col]
    }
}

impl<T: Float> Matrix3Storage<T> for [[T; 3]; 3] {
    fn zeroed() -> Self {
        [[T::zero(); 3]; 3]
    }

    #[inline]
    fn set_element(&mut self, row: usize, col: usize, value: T) {
        self[row][col] = value;
    }
}

impl<T: Float + nalgebra::Scalar> Matrix3View<T> for Matrix3<T> {
    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

impl<T: Float + nalgebra::Scalar> Matrix3Storage<T> for Matrix3<T> {
    fn zeroed() -> Self {
        Matrix3::from_element(T::zero())
    }

    #[inline]
    fn set_element(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }
}

impl<T: Float + nalgebra::Scalar> Matrix3View<T> for DMatrix<T> {
    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

impl<T: Float + nalgebra::Scalar> Matrix3Storage<T> for DMatrix<T> {
    fn zeroed() -> Self {
        DMatrix::from_element(3, 3, T::zero())
    }

    #[inline]
    fn set_element(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }
}

macro_rules! impl_faer_matrix3 {
    ($($scalar:ty),*) => {$(
        impl Matrix3View<$scalar> for Mat<$scalar> {
            #[inline]
            fn element(&self, row: usize, col: usize) -> $scalar {
                self[(row, col)]
            }

            fn shape(&self) -> (usize, usize) {
                (self.nrows(), self.ncols())
            }
        }

        impl Matrix3Storage<$scalar> for Mat<$scalar> {
            fn zeroed() -> Self {
                Mat::zeros(3, 3)
            }

            #[inline]
            fn set_element(&mut self, row: usize, col: usize, value: $scalar) {
                self[(row, col)] = value;
            }
        }
    )*};
}

impl_faer_matrix3!(f32, f64);

impl<T: Float> Quaternion<T> {
    /// Convert to a 3×3 rotation matrix of any [`Matrix3Storage`] type.
    ///
    /// The quaternion is assumed to be unit length; no normalization happens here.
    ///
    /// ```
    /// use apex_quaternion::Quaternion;
    ///
    /// let q = Quaternion::rotation(std::f64::consts::PI, 0.0, 0.0, 1.0);
    /// let r: [[f64; 3]; 3] = q.to_matrix();
    /// assert!((r[0][0] + 1.0).abs() < 1e-12);
    /// ```
    pub fn to_matrix<M: Matrix3Storage<T>>(&self) -> M {
        let mut matrix = M::zeroed();
        self.write_matrix(&mut matrix);
        matrix
    }

    /// Write the rotation matrix into an existing container.
    ///
    /// Only the nine cells (i, j) with i, j in 0..3 are touched.
    pub fn write_matrix<M: Matrix3Storage<T>>(&self, matrix: &mut M) {
        let [w, x, y, z] = self.coords();
        let one = T::one();
        let two = two::<T>();

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        matrix.set_element(0, 0, one - two * (yy + zz));
        matrix.set_element(0, 1, two * (xy - wz));
        matrix.set_element(0, 2, two * (xz + wy));

        matrix.set_element(1, 0, two * (xy + wz));
        matrix.set_element(1, 1, one - two * (xx + zz));
        matrix.set_element(1, 2, two * (yz - wx));

        matrix.set_element(2, 0, two * (xz - wy));
        matrix.set_element(2, 1, two * (yz + wx));
        matrix.set_element(2, 2, one - two * (xx + yy));
    }

    /// Create a quaternion from a 3×3 rotation matrix using Shepperd's method.
    ///
    /// The matrix is assumed to be a proper rotation; see
    /// [`Quaternion::try_from_matrix`] for the validating variant. The component solved
    /// by the square root comes out non-negative, which fixes the sign of the result.
    /// Ties between candidates resolve to the earlier one in (a, b, c, d) order.
    pub fn from_matrix<M: Matrix3View<T> + ?Sized>(matrix: &M) -> Self {
        let m = |row, col| matrix.element(row, col);
        let (m00, m01, m02) = (m(0, 0), m(0, 1), m(0, 2));
        let (m10, m11, m12) = (m(1, 0), m(1, 1), m(1, 2));
        let (m20, m21, m22) = (m(2, 0), m(2, 1), m(2, 2));

        let candidates = [
            m00 + m11 + m22,
            m00 - m11 - m22,
            m11 - m00 - m22,
            m22 - m00 - m11,
        ];
        let mut branch = 0;
        for (i, &candidate) in candidates.iter().enumerate().skip(1) {
            if candidate > candidates[branch] {
                branch = i;
            }
        }

        let root = (T::one() + candidates[branch]).sqrt() * half::<T>();
        let s = two::<T>() * two::<T>() * root;

        match branch {
            0 => Self::new(root, (m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s),
            1 => Self::new((m21 - m12) / s, root, (m01 + m10) / s, (m02 + m20) / s),
            2 => Self::new((m02 - m20) / s, (m01 + m10) / s, root, (m12 + m21) / s),
            _ => Self::new((m10 - m01) / s, (m02 + m20) / s, (m12 + m21) / s, root),
        }
    }

    /// Checked variant of [`Quaternion::from_matrix`].
    ///
    /// Rejects containers that are not 3×3, non-finite entries, and matrices that are not
    /// orthonormal with determinant +1 within `tolerance`.
    pub fn try_from_matrix<M: Matrix3View<T> + ?Sized>(
        matrix: &M,
        tolerance: T,
    ) -> QuatResult<Self> {
        let (rows, cols) = matrix.shape();
        if (rows, cols) != (3, 3) {
            debug!("Rejected {}x{} matrix for quaternion conversion", rows, cols);
            return Err(QuatError::InvalidMatrixShape { rows, cols });
        }

        let mut m = [[T::zero(); 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = matrix.element(i, j);
                if !value.is_finite() {
                    debug!("Rejected matrix with non-finite entry at ({}, {})", i, j);
                    return Err(QuatError::NonFinite(format!(
                        "matrix entry ({i}, {j}) is not finite"
                    )));
                }
            }
        }

        // max |(MᵀM - I)ij|
        let mut deviation = T::zero();
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = T::zero();
                for row in &m {
                    sum = sum + row[i] * row[j];
                }
                let expected = if i == j { T::one() } else { T::zero() };
                deviation = deviation.max((sum - expected).abs());
            }
        }

        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);

        if deviation > tolerance || (det - T::one()).abs() > tolerance {
            let deviation = deviation.to_f64().unwrap_or(f64::NAN);
            let det = det.to_f64().unwrap_or(f64::NAN);
            debug!(
                "Rejected matrix: orthonormality deviation {:e}, determinant {}",
                deviation, det
            );
            return Err(QuatError::NotARotation(format!(
                "orthonormality deviation {deviation:e}, determinant {det}"
            )));
        }

        Ok(Self::from_matrix(&m))
    }
}

// ============================================================================
// Tests
// ============================================================================
