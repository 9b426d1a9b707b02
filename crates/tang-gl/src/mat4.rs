use crate::scalar::AlmostEq;
use crate::{gauss_jordan, Mat3, MathError, Quat, Vec3, Vec4};
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

/// 4x4 matrix, column-major storage.
///
/// Element `(row, col)` lives at `m[row + 4 * col]`; translation occupies
/// `m[12..15]`. Used for homogeneous transforms (affine: rotation + translation + scale)
/// and projections.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            m: [
                m00, m10, m20, m30,
                m01, m11, m21, m31,
                m02, m12, m22, m32,
                m03, m13, m23, m33,
            ],
        }
    }

    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { m: [0.0; 16] }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row + 4 * col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.m[row + 4 * col] = value;
    }

    /// Swap the elements at `(r1, c1)` and `(r2, c2)`.
    #[inline]
    pub fn swap(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) {
        self.m.swap(r1 + 4 * c1, r2 + 4 * c2);
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for c in 0..4 {
            self.swap(a, c, b, c);
        }
    }

    pub fn swap_cols(&mut self, a: usize, b: usize) {
        for r in 0..4 {
            self.swap(r, a, r, b);
        }
    }

    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    #[inline]
    pub fn fill(&mut self, value: f32) {
        self.m = [value; 16];
    }

    #[inline]
    pub fn assign(&mut self, other: &Mat4) {
        *self = *other;
    }

    /// The 3x3 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Mat3 {
        let mut out = Mat3::zero();
        let keep = |skip: usize| [0, 1, 2, 3].into_iter().filter(move |&i| i != skip);
        for (c_out, c) in keep(col).enumerate() {
            for (r_out, r) in keep(row).enumerate() {
                out.set(r_out, c_out, self.get(r, c));
            }
        }
        out
    }

    /// Determinant by cofactor expansion along column 0.
    pub fn determinant(&self) -> f32 {
        let mut det = 0.0;
        let mut sign = 1.0;
        for r in 0..4 {
            det += sign * self.get(r, 0) * self.minor(r, 0).determinant();
            sign = -sign;
        }
        det
    }

    /// Extract the upper-left 3x3 submatrix
    pub fn upper_left_3x3(&self) -> Mat3 {
        self.minor(3, 3)
    }

    /// Build from rotation (3x3) and translation
    pub fn from_rotation_translation(rot: Mat3, trans: Vec3) -> Self {
        let mut out = Self::identity();
        for c in 0..3 {
            for r in 0..3 {
                out.set(r, c, rot.get(r, c));
            }
        }
        out.m[12] = trans.x;
        out.m[13] = trans.y;
        out.m[14] = trans.z;
        out
    }

    /// Inverse by Gauss-Jordan elimination against the identity.
    pub fn inverted(&self) -> Result<Self, MathError> {
        let mut work = *self;
        let mut inv = Self::identity();
        gauss_jordan(&mut work, &mut inv)?;
        Ok(inv)
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
        for c in 0..4 {
            for r in 0..4 {
                out.set(r, c, self.get(c, r));
            }
        }
        out
    }

    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Matrix-Vec4 product
    #[inline]
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.m;
        Vec4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }

    /// Matrix-matrix product `self · rhs`
    pub fn mul_mat(&self, rhs: &Mat4) -> Mat4 {
        let mut out = Self::zero();
        for c in 0..4 {
            let col = self.mul_vec4(Vec4::new(rhs.get(0, c), rhs.get(1, c), rhs.get(2, c), rhs.get(3, c)));
            out.m[4 * c..4 * c + 4].copy_from_slice(&[col.x, col.y, col.z, col.w]);
        }
        out
    }

    /// `self = self · rhs`
    #[inline]
    pub fn multiply(&mut self, rhs: &Mat4) {
        *self = self.mul_mat(rhs);
    }

    #[inline]
    pub fn scalar_multiply(&mut self, factor: f32) {
        *self = *self * factor;
    }

    /// Non-uniform scale matrix
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        let mut out = Self::identity();
        out.m[0] = x;
        out.m[5] = y;
        out.m[10] = z;
        out
    }

    /// Translation matrix
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut out = Self::identity();
        out.m[12] = x;
        out.m[13] = y;
        out.m[14] = z;
        out
    }

    /// Rotation about X axis
    pub fn rotation_x(radians: f32) -> Self {
        Self::from_rotation_translation(Mat3::rotation_x(radians), Vec3::zero())
    }

    /// Rotation about Y axis
    pub fn rotation_y(radians: f32) -> Self {
        Self::from_rotation_translation(Mat3::rotation_y(radians), Vec3::zero())
    }

    /// Rotation about Z axis
    pub fn rotation_z(radians: f32) -> Self {
        Self::from_rotation_translation(Mat3::rotation_z(radians), Vec3::zero())
    }

    /// Rotation about arbitrary axis (Rodrigues' formula)
    pub fn rotation_axis_angle(axis: Vec3, radians: f32) -> Self {
        Self::from_rotation_translation(Mat3::rotation_axis_angle(axis, radians), Vec3::zero())
    }

    pub fn rotation_quaternion(q: &Quat) -> Self {
        Self::from_rotation_translation(Mat3::rotation_quaternion(q), Vec3::zero())
    }
}

impl AlmostEq for Mat4 {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        self.m.almost_eq(&other.m)
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[row + 4 * col]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.m[row + 4 * col]
    }
}

impl Default for Mat4 {
    fn default() -> Self { Self::identity() }
}

impl Add for Mat4 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::from_cols_array(core::array::from_fn(|i| self.m[i] + rhs.m[i]))
    }
}

impl Sub for Mat4 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::from_cols_array(core::array::from_fn(|i| self.m[i] - rhs.m[i]))
    }
}

impl Neg for Mat4 {
    type Output = Self;
    #[inline] fn neg(self) -> Self {
        Self::from_cols_array(self.m.map(|v| -v))
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::from_cols_array(self.m.map(|v| v * rhs))
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline] fn mul(self, rhs: Vec4) -> Vec4 { self.mul_vec4(rhs) }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}

impl core::fmt::Display for Mat4 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for r in 0..4 {
            if r > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "| {} {} {} {} |",
                self.get(r, 0),
                self.get(r, 1),
                self.get(r, 2),
                self.get(r, 3)
            )?;
        }
        Ok(())
    }
}
