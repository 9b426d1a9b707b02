use crate::scalar::{sin_cos_approx, AlmostEq};
use crate::{MathError, Quat, Vec3};
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// 3x3 matrix, column-major storage.
///
/// Element `(row, col)` lives at `m[row + 3 * col]`. Used for 3D rotations
/// and for 2D homogeneous transforms (translation in `m[6]`, `m[7]`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    m: [f32; 9],
}

impl Mat3 {
    /// Construct from individual elements (row-major argument order for readability).
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self { m: [m00, m10, m20, m01, m11, m21, m02, m12, m22] }
    }

    /// Construct from the flat column-major array.
    #[inline]
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 9] {
        &self.m
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { m: [0.0; 9] }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self { m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0] }
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row + 3 * col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.m[row + 3 * col] = value;
    }

    /// Swap the elements at `(r1, c1)` and `(r2, c2)`.
    #[inline]
    pub fn swap(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) {
        self.m.swap(r1 + 3 * c1, r2 + 3 * c2);
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for c in 0..3 {
            self.swap(a, c, b, c);
        }
    }

    pub fn swap_cols(&mut self, a: usize, b: usize) {
        for r in 0..3 {
            self.swap(r, a, r, b);
        }
    }

    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    #[inline]
    pub fn fill(&mut self, value: f32) {
        self.m = [value; 9];
    }

    #[inline]
    pub fn assign(&mut self, other: &Mat3) {
        *self = *other;
    }

    /// Determinant by the rule of Sarrus.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * m[4] * m[8] + m[1] * m[5] * m[6] + m[2] * m[3] * m[7]
            - m[2] * m[4] * m[6]
            - m[0] * m[5] * m[7]
            - m[1] * m[3] * m[8]
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugated(&self) -> Self {
        let m = &self.m;
        Self::from_cols_array([
            m[4] * m[8] - m[5] * m[7],
            m[2] * m[7] - m[1] * m[8],
            m[1] * m[5] - m[2] * m[4],
            m[5] * m[6] - m[3] * m[8],
            m[0] * m[8] - m[2] * m[6],
            m[2] * m[3] - m[0] * m[5],
            m[3] * m[7] - m[4] * m[6],
            m[1] * m[6] - m[0] * m[7],
            m[0] * m[4] - m[1] * m[3],
        ])
    }

    #[inline]
    pub fn adjugate(&mut self) {
        *self = self.adjugated();
    }

    /// Closed-form inverse `adj(M) / det(M)`.
    pub fn inverted(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            tracing::debug!("mat3 inverse: zero determinant");
            return Err(MathError::ZeroDeterminant);
        }
        Ok(self.adjugated() * (1.0 / det))
    }

    /// Invert in place. On error `self` is left untouched.
    pub fn inverse(&mut self) -> Result<(), MathError> {
        *self = self.inverted()?;
        Ok(())
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.almost_eq(&Self::identity())
    }

    pub fn transposed(&self) -> Self {
        let mut out = Self::zero();
        for c in 0..3 {
            for r in 0..3 {
                out.set(r, c, self.get(c, r));
            }
        }
        out
    }

    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Matrix-vector product
    #[inline]
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }

    /// Matrix-matrix product `self · rhs`
    pub fn mul_mat(&self, rhs: &Mat3) -> Mat3 {
        let mut out = Self::zero();
        for c in 0..3 {
            let col = self.mul_vec(Vec3::new(rhs.get(0, c), rhs.get(1, c), rhs.get(2, c)));
            out.set(0, c, col.x);
            out.set(1, c, col.y);
            out.set(2, c, col.z);
        }
        out
    }

    /// `self = self · rhs`
    #[inline]
    pub fn multiply(&mut self, rhs: &Mat3) {
        *self = self.mul_mat(rhs);
    }

    #[inline]
    pub fn scalar_multiply(&mut self, factor: f32) {
        *self = *self * factor;
    }

    /// 2D homogeneous scaling.
    pub fn scaling(x: f32, y: f32) -> Self {
        let mut out = Self::identity();
        out.m[0] = x;
        out.m[4] = y;
        out
    }

    /// 2D homogeneous translation.
    pub fn translation(x: f32, y: f32) -> Self {
        let mut out = Self::identity();
        out.m[6] = x;
        out.m[7] = y;
        out
    }

    /// Rotation matrix about X axis
    pub fn rotation_x(radians: f32) -> Self {
        let (s, c) = sin_cos_approx(radians);
        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    /// Rotation matrix about Y axis
    pub fn rotation_y(radians: f32) -> Self {
        let (s, c) = sin_cos_approx(radians);
        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Rotation matrix about Z axis
    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = sin_cos_approx(radians);
        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation about an arbitrary axis (Rodrigues' formula). The axis is
    /// normalized first.
    pub fn rotation_axis_angle(axis: Vec3, radians: f32) -> Self {
        let (s, c) = sin_cos_approx(radians);
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis.normalized();
        Self::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        )
    }

    /// Rotation from a unit quaternion.
    pub fn rotation_quaternion(q: &Quat) -> Self {
        let Quat { x, y, z, w } = *q;
        Self::new(
            1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y - w * z),       2.0 * (x * z + w * y),
            2.0 * (x * y + w * z),       1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z - w * x),
            2.0 * (x * z - w * y),       2.0 * (y * z + w * x),       1.0 - 2.0 * (x * x + y * y),
        )
    }
}

impl AlmostEq for Mat3 {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        self.m.almost_eq(&other.m)
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[row + 3 * col]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.m[row + 3 * col]
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Add for Mat3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols_array(core::array::from_fn(|i| self.m[i] + rhs.m[i]))
    }
}

impl Sub for Mat3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols_array(core::array::from_fn(|i| self.m[i] - rhs.m[i]))
    }
}

impl Neg for Mat3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_cols_array(self.m.map(|v| -v))
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols_array(self.m.map(|v| v * rhs))
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl core::fmt::Display for Mat3 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for r in 0..3 {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "| {} {} {} |", self.get(r, 0), self.get(r, 1), self.get(r, 2))?;
        }
        Ok(())
    }
}
