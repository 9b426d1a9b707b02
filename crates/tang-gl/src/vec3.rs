use crate::scalar::{almost_equal, sqrt_approx, AlmostEq};
use crate::{Mat3, Mat4, Vec4};
use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self { Self { x, y, z } }

    #[inline]
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0) }

    #[inline]
    pub const fn splat(v: f32) -> Self { Self::new(v, v, v) }

    #[inline]
    pub const fn x() -> Self { Self::new(1.0, 0.0, 0.0) }

    #[inline]
    pub const fn y() -> Self { Self::new(0.0, 1.0, 0.0) }

    #[inline]
    pub const fn z() -> Self { Self::new(0.0, 0.0, 1.0) }

    #[inline]
    pub fn fill(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[inline]
    pub fn set_zero(&mut self) { self.fill(0.0, 0.0, 0.0); }

    #[inline]
    pub fn assign(&mut self, other: &Vec3) { *self = *other; }

    #[inline]
    pub fn scale(&mut self, s: f32) { *self *= s; }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length_sq(self) -> f32 { self.dot(self) }

    #[inline]
    pub fn length(self) -> f32 { sqrt_approx(self.length_sq()) }

    /// Scale to unit length in place. A zero vector becomes non-finite.
    #[inline]
    pub fn normalize(&mut self) {
        let inv = 1.0 / self.length();
        self.scale(inv);
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 { Some(self / len) } else { None }
    }

    /// Extend to Vec4 with a given w component
    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Transform as a point: rotation, scale and translation.
    pub fn transform(&mut self, m: &Mat4) {
        let m = m.as_array();
        let t = *self;
        self.x = t.x * m[0] + t.y * m[4] + t.z * m[8] + m[12];
        self.y = t.x * m[1] + t.y * m[5] + t.z * m[9] + m[13];
        self.z = t.x * m[2] + t.y * m[6] + t.z * m[10] + m[14];
    }

    /// Undo a rigid transform: remove the translation, then apply the
    /// transposed rotation block. Only correct for orthonormal rotations.
    pub fn inverse_transform(&mut self, m: &Mat4) {
        let m = m.as_array();
        let t = Vec3::new(self.x - m[12], self.y - m[13], self.z - m[14]);
        self.x = t.x * m[0] + t.y * m[1] + t.z * m[2];
        self.y = t.x * m[4] + t.y * m[5] + t.z * m[6];
        self.z = t.x * m[8] + t.y * m[9] + t.z * m[10];
    }

    /// Transform with w = 1, then divide by the resulting w (projection).
    pub fn transform_coord(&mut self, m: &Mat4) {
        let mut h = self.extend(1.0);
        h.transform(m);
        let inv_w = 1.0 / h.w;
        self.fill(h.x * inv_w, h.y * inv_w, h.z * inv_w);
    }

    /// Transform a direction: the 3x3 block only, translation is ignored.
    pub fn transform_normal(&mut self, m: &Mat4) {
        let m = m.as_array();
        let t = *self;
        self.x = t.x * m[0] + t.y * m[4] + t.z * m[8];
        self.y = t.x * m[1] + t.y * m[5] + t.z * m[9];
        self.z = t.x * m[2] + t.y * m[6] + t.z * m[10];
    }

    /// Transform a direction by the transposed 3x3 block.
    pub fn inverse_transform_normal(&mut self, m: &Mat4) {
        let m = m.as_array();
        let t = *self;
        self.x = t.x * m[0] + t.y * m[1] + t.z * m[2];
        self.y = t.x * m[4] + t.y * m[5] + t.z * m[6];
        self.z = t.x * m[8] + t.y * m[9] + t.z * m[10];
    }

    #[inline]
    pub fn transform_mat3(&mut self, m: &Mat3) {
        *self = m.mul_vec(*self);
    }

    #[inline]
    pub fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl AlmostEq for Vec3 {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x)
            && almost_equal(self.y, other.y)
            && almost_equal(self.z, other.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self { [v.x, v.y, v.z] }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs;
    }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Vec3) -> Vec3 { rhs * self }
}

impl core::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
